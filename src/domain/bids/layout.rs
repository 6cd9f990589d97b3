//! File names produced and consumed by the DWI preparation pipeline.

use std::path::{Path, PathBuf};

/// Pipeline outputs live under `<bids>/derivatives/<sub>/<ses>/dwi`.
pub const DERIVATIVES_DIR: &str = "derivatives";

/// Raw-data name patterns for the runs combined in step 1.
pub struct DwiRunPatterns;

impl DwiRunPatterns {
    pub const AP_RUN_1: &'static str = "_dir-AP_run-1_part-mag_dwi.nii.gz";
    pub const AP_RUN_2: &'static str = "_dir-AP_run-2_part-mag_dwi.nii.gz";
    pub const PA_RUN_1: &'static str = "_dir-PA_run-1_part-mag_dwi.nii.gz";
    pub const PA_B0_SOURCE_TAIL: &'static str = "_run-1_part-mag_dwi.nii.gz";

    /// Output stem for two combined AP runs: run-1 name without `_run-1`
    /// and extension, plus `_combined`.
    pub fn combined_stem(run1_name: &str) -> String {
        let without_run = run1_name.replace("_run-1", "");
        let stem = without_run.strip_suffix(".nii.gz").unwrap_or(&without_run);
        format!("{}_combined", stem)
    }

    /// b0 stem derived from a combined AP stem: everything before
    /// `dir-AP`, then `dir-AP_b0`.
    pub fn ap_b0_stem(combined_stem: &str) -> String {
        let head = combined_stem.split("dir-AP").next().unwrap_or(combined_stem);
        format!("{}dir-AP_b0", head)
    }

    /// Destination name for the PA reference image.
    pub fn pa_b0_name(pa_run1_name: &str) -> String {
        pa_run1_name.replace(Self::PA_B0_SOURCE_TAIL, "_b0.nii.gz")
    }
}

/// Replace a trailing `.nii.gz` with another extension.
pub fn sidecar_of(image: &Path, ext: &str) -> PathBuf {
    let name = image.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stem = name.strip_suffix(".nii.gz").unwrap_or(name);
    image.with_file_name(format!("{}{}", stem, ext))
}

/// `<sub>_<ses>_acq-<label>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPrefix(String);

impl SessionPrefix {
    pub fn new(subject: &str, session: &str, acq_label: &str) -> Self {
        Self(format!("{}_{}_acq-{}", subject, session, acq_label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Absolute paths of every file in a derivatives session directory.
#[derive(Debug, Clone)]
pub struct SessionFiles {
    dir: PathBuf,
    prefix: SessionPrefix,
}

impl SessionFiles {
    pub fn new(dir: PathBuf, prefix: SessionPrefix) -> Self {
        Self { dir, prefix }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&self, tail: &str) -> PathBuf {
        self.dir.join(format!("{}{}", self.prefix.as_str(), tail))
    }

    pub fn combined_nii(&self) -> PathBuf {
        self.file("_dir-AP_part-mag_dwi_combined.nii.gz")
    }

    pub fn combined_json(&self) -> PathBuf {
        self.file("_dir-AP_part-mag_dwi_combined.json")
    }

    pub fn combined_bval(&self) -> PathBuf {
        self.file("_dir-AP_part-mag_dwi_combined.bval")
    }

    pub fn combined_bvec(&self) -> PathBuf {
        self.file("_dir-AP_part-mag_dwi_combined.bvec")
    }

    pub fn ap_b0(&self) -> PathBuf {
        self.file("_dir-AP_b0.nii.gz")
    }

    pub fn pa_b0(&self) -> PathBuf {
        self.file("_dir-PA_b0.nii.gz")
    }

    pub fn topup_input(&self) -> PathBuf {
        self.file("_b0_TOPUP_input.nii.gz")
    }

    pub fn topup_params(&self) -> PathBuf {
        self.file("_b0_TOPUP_input.params")
    }

    pub fn topup_cmd(&self) -> PathBuf {
        self.file("_b0_TOPUP.cmd")
    }

    pub fn topup_output(&self) -> PathBuf {
        self.file("_b0_TOPUP_output")
    }

    pub fn fmap_hz(&self) -> PathBuf {
        self.file("_b0_TOPUP_output_fmap_Hz.nii.gz")
    }

    pub fn fmap_mag(&self) -> PathBuf {
        self.file("_b0_TOPUP_output_fmap_mag.nii.gz")
    }

    pub fn fmap_mag_brainmask(&self) -> PathBuf {
        self.file("_b0_TOPUP_output_fmap_mag_brainmask.nii.gz")
    }

    pub fn fmap_mag_brain(&self) -> PathBuf {
        self.file("_b0_TOPUP_output_fmap_mag_brain.nii.gz")
    }

    pub fn eddy_output(&self) -> PathBuf {
        self.file("_dwi_combined_eddy")
    }

    pub fn eddy_indices(&self) -> PathBuf {
        self.file("_dwi_combined_eddy.indices")
    }

    pub fn eddy_slspec(&self) -> PathBuf {
        self.file("_dwi_combined_eddy.slspec")
    }

    pub fn eddy_cmd(&self) -> PathBuf {
        self.file("_dwi_combined_eddy.cmd")
    }
}
