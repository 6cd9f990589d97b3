use std::path::Path;

use ndarray::{ArrayD, Axis};
use nifti::writer::WriterOptions;
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};

use crate::domain::AppError;
use crate::ports::VolumeStore;

/// `VolumeStore` backed by NIfTI-1 files (`.nii` / `.nii.gz`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NiftiVolumeStore;

impl NiftiVolumeStore {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, path: &Path) -> Result<(NiftiHeader, ArrayD<f32>), AppError> {
        if !path.exists() {
            return Err(AppError::InputNotFound(path.display().to_string()));
        }
        let object = ReaderOptions::new().read_file(path).map_err(|e| AppError::nifti(path, e))?;
        let header = object.header().clone();
        let data = object
            .into_volume()
            .into_ndarray::<f32>()
            .map_err(|e| AppError::nifti(path, e))?;
        tracing::debug!(path = %path.display(), shape = ?data.shape(), "read volume");
        Ok((header, data))
    }

    fn write(&self, path: &Path, header: &NiftiHeader, data: &ArrayD<f32>) -> Result<(), AppError> {
        // Values were scaled on read; keep them from being scaled again.
        let mut header = header.clone();
        header.scl_slope = 1.0;
        header.scl_inter = 0.0;
        WriterOptions::new(path)
            .reference_header(&header)
            .write_nifti(data)
            .map_err(|e| AppError::nifti(path, e))?;
        tracing::debug!(path = %path.display(), shape = ?data.shape(), "wrote volume");
        Ok(())
    }
}

/// View a 3D image as a single-volume 4D image.
fn as_4d(path: &Path, data: ArrayD<f32>) -> Result<ArrayD<f32>, AppError> {
    match data.ndim() {
        3 => Ok(data.insert_axis(Axis(3))),
        4 => Ok(data),
        n => Err(AppError::ImageShape {
            path: path.display().to_string(),
            details: format!("expected a 3D or 4D image, got {}D {:?}", n, data.shape()),
        }),
    }
}

impl VolumeStore for NiftiVolumeStore {
    fn volume_count(&self, path: &Path) -> Result<usize, AppError> {
        if !path.exists() {
            return Err(AppError::InputNotFound(path.display().to_string()));
        }
        let header = NiftiHeader::from_file(path).map_err(|e| AppError::nifti(path, e))?;
        let ndim = header.dim[0];
        if ndim <= 3 { Ok(1) } else { Ok(usize::from(header.dim[4]).max(1)) }
    }

    fn concat_volumes(&self, inputs: &[&Path], output: &Path) -> Result<usize, AppError> {
        let Some((first, rest)) = inputs.split_first() else {
            return Err(AppError::config_error("no images to concatenate"));
        };

        let (header, data) = self.read(first)?;
        let mut arrays = vec![as_4d(first, data)?];
        for path in rest {
            let (_, data) = self.read(path)?;
            arrays.push(as_4d(path, data)?);
        }

        let views: Vec<_> = arrays.iter().map(|a| a.view()).collect();
        let combined = ndarray::concatenate(Axis(3), &views).map_err(|e| AppError::ImageShape {
            path: output.display().to_string(),
            details: format!("cannot concatenate inputs: {}", e),
        })?;
        let nvols = combined.shape()[3];
        self.write(output, &header, &combined)?;
        Ok(nvols)
    }

    fn extract_volumes(
        &self,
        input: &Path,
        indices: &[usize],
        output: &Path,
    ) -> Result<(), AppError> {
        let (header, data) = self.read(input)?;
        if data.ndim() != 4 {
            return Err(AppError::ImageShape {
                path: input.display().to_string(),
                details: format!("expected 4D image, got shape {:?}", data.shape()),
            });
        }
        let nvols = data.shape()[3];
        if let Some(bad) = indices.iter().find(|&&i| i >= nvols) {
            return Err(AppError::ImageShape {
                path: input.display().to_string(),
                details: format!("volume {} out of range ({} volumes)", bad, nvols),
            });
        }
        let selected = data.select(Axis(3), indices);
        self.write(output, &header, &selected)
    }
}
