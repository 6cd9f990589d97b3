use std::fs;
use std::path::Path;

use ndarray::{Array, IxDyn};
use nifti::writer::WriterOptions;

/// Write a zero-filled image with the given shape.
pub fn write_image(path: &Path, shape: &[usize]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let data = Array::<f32, _>::zeros(IxDyn(shape));
    WriterOptions::new(path).write_nifti(&data).unwrap();
}

/// Write a 2x2x2 image with `nvols` volumes.
pub fn write_volumes(path: &Path, nvols: usize) {
    write_image(path, &[2, 2, 2, nvols]);
}
