//! Image file naming: stems, multi-part extensions and derived-output suffixes.

use std::path::{Path, PathBuf};

use super::AppError;

const AFNI_VIEWS: [&str; 3] = ["+orig", "+tlrc", "+acpc"];
const AFNI_PARTS: [&str; 3] = [".HEAD", ".BRIK", ".BRIK.gz"];

/// Container format of an image on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Nifti,
    NiftiGz,
    Afni,
}

/// Suffixes used for outputs derived from an input image.
pub mod suffix {
    pub const SKULL_STRIPPED: &str = "_SS";
    pub const AUTOBOX: &str = "_abox";
    pub const FOV: &str = "_fov";
    pub const BIAS_CORRECTED: &str = "_biascorr";
    pub const MOTION_CORRECTED: &str = "_mc";
    pub const CAPTIONED: &str = "_caption";
}

/// A parsed image file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    dir: PathBuf,
    stem: String,
    format: ImageFormat,
}

impl ImageName {
    pub fn parse(path: &Path) -> Result<Self, AppError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidImageName(path.display().to_string()))?;
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let (stem, format) = if let Some(stem) = file_name.strip_suffix(".nii.gz") {
            (stem, ImageFormat::NiftiGz)
        } else if let Some(stem) = file_name.strip_suffix(".nii") {
            (stem, ImageFormat::Nifti)
        } else {
            let stem = AFNI_PARTS
                .iter()
                .filter_map(|part| file_name.strip_suffix(part))
                .find_map(|rest| {
                    AFNI_VIEWS.iter().find_map(|view| rest.strip_suffix(view))
                })
                .ok_or_else(|| AppError::InvalidImageName(path.display().to_string()))?;
            (stem, ImageFormat::Afni)
        };

        if stem.is_empty() {
            return Err(AppError::InvalidImageName(path.display().to_string()));
        }

        Ok(Self { dir, stem: stem.to_string(), format })
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn is_nifti(&self) -> bool {
        matches!(self.format, ImageFormat::Nifti | ImageFormat::NiftiGz)
    }

    pub fn is_afni(&self) -> bool {
        self.format == ImageFormat::Afni
    }

    /// `<dir>/<stem><suffix>.nii.gz`
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.dir.join(format!("{}{}.nii.gz", self.stem, suffix))
    }

    /// `<dir>/<stem>.nii.gz`
    pub fn as_nifti_gz(&self) -> PathBuf {
        self.with_suffix("")
    }

    /// Non-image file derived from the input, `<dir>/<stem><suffix>.<extension>`.
    pub fn sidecar(&self, suffix: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{}{}.{}", self.stem, suffix, extension))
    }
}
