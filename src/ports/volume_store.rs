use std::path::Path;

use crate::domain::AppError;

/// Volumetric image I/O limited to what the pipelines need.
pub trait VolumeStore {
    /// Number of volumes along the fourth axis (1 for a 3D image).
    fn volume_count(&self, path: &Path) -> Result<usize, AppError>;

    /// Concatenate images along the fourth axis, keeping the first
    /// image's header. Returns the number of volumes written.
    fn concat_volumes(&self, inputs: &[&Path], output: &Path) -> Result<usize, AppError>;

    /// Write the selected volumes of a 4D image, keeping its header.
    fn extract_volumes(
        &self,
        input: &Path,
        indices: &[usize],
        output: &Path,
    ) -> Result<(), AppError>;
}
