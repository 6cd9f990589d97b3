//! Tiny BIDS diffusion datasets built from real NIfTI files.

use ndarray::{Array, IxDyn};
use nifti::writer::WriterOptions;
use std::fs;
use std::path::{Path, PathBuf};

use super::TestContext;

pub(crate) const STEM: &str = "sub-01_ses-01_acq-EP2D";

/// Write a zero-filled 2x2x2 image with `nvols` volumes.
pub(crate) fn write_volumes(path: &Path, nvols: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create image directory");
    }
    let data = Array::<f32, _>::zeros(IxDyn(&[2, 2, 2, nvols]));
    WriterOptions::new(path).write_nifti(&data).expect("Failed to write NIfTI fixture");
}

impl TestContext {
    /// Root of the BIDS dataset inside the work directory.
    pub(crate) fn bids_root(&self) -> PathBuf {
        self.work_dir().join("bids")
    }

    /// Raw session with two AP runs (3 + 2 volumes, two b0s) and one PA run.
    pub(crate) fn write_raw_dwi_session(&self) {
        let dwi = self.bids_root().join("sub-01/ses-01/dwi");
        let name = |tail: &str| dwi.join(format!("{}_{}", STEM, tail));

        write_volumes(&name("dir-AP_run-1_part-mag_dwi.nii.gz"), 3);
        write_volumes(&name("dir-AP_run-2_part-mag_dwi.nii.gz"), 2);
        write_volumes(&name("dir-PA_run-1_part-mag_dwi.nii.gz"), 1);

        let sidecar = r#"{"TotalReadoutTime": 0.0512, "SliceTiming": [0.0, 0.5, 0.0, 0.5]}"#;
        fs::write(name("dir-AP_run-1_part-mag_dwi.json"), sidecar).unwrap();
        fs::write(name("dir-PA_run-1_part-mag_dwi.json"), sidecar).unwrap();
        fs::write(name("dir-AP_run-1_part-mag_dwi.bval"), "0 1000 1000\n").unwrap();
        fs::write(name("dir-AP_run-2_part-mag_dwi.bval"), "0 2000\n").unwrap();
        fs::write(name("dir-AP_run-1_part-mag_dwi.bvec"), "0 1 0\n0 0 1\n0 0 0\n").unwrap();
        fs::write(name("dir-AP_run-2_part-mag_dwi.bvec"), "0 0\n0 1\n0 0\n").unwrap();
    }

    /// Derivatives directory of the single fixture session.
    pub(crate) fn derivatives_session(&self) -> PathBuf {
        self.bids_root().join("derivatives/sub-01/ses-01/dwi")
    }
}
