use std::io;

use thiserror::Error;

/// Library-wide error type for bto operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file named on the command line does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON sidecar parsing error.
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// NIfTI read or write failure.
    #[error("NIfTI error on '{path}': {details}")]
    Nifti { path: String, details: String },

    /// Image file name carries no recognised extension.
    #[error("Invalid image name '{0}': expected .nii, .nii.gz or an AFNI +view.HEAD/.BRIK dataset")]
    InvalidImageName(String),

    /// Input file is missing.
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// Output would overwrite an existing file.
    #[error("Output already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    /// Path given where a directory is required.
    #[error("'{0}' is not a valid directory")]
    NotADirectory(String),

    /// Gradient table (bval/bvec) is malformed.
    #[error("Malformed gradient table {file}: {reason}")]
    GradientTable { file: String, reason: String },

    /// Slice timing cannot be arranged into excitation groups.
    #[error("Invalid slice timing: {0}")]
    SliceTiming(String),

    /// Volume shape is not what the operation requires.
    #[error("Unexpected image shape in {path}: {details}")]
    ImageShape { path: String, details: String },

    /// Required external tools are not available.
    #[error("Required MRI tools are missing from PATH: {0}")]
    MissingTools(String),

    /// External tool could not be launched.
    #[error("Failed to launch '{command}': {details}")]
    ToolLaunch { command: String, details: String },

    /// External tool ran but did not succeed.
    #[error("'{command}' failed with {status}")]
    ToolFailed { command: String, status: String },

    /// External tool succeeded but did not produce its expected output.
    #[error("Expected output was not produced: {0}")]
    MissingToolOutput(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Template rendering failure.
    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn nifti<P: AsRef<std::path::Path>, E: std::fmt::Display>(path: P, err: E) -> Self {
        AppError::Nifti { path: path.as_ref().display().to_string(), details: err.to_string() }
    }

    /// Provide an `io::ErrorKind` view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::JsonParseError(_)
            | AppError::InvalidImageName(_)
            | AppError::NotADirectory(_)
            | AppError::GradientTable { .. }
            | AppError::SliceTiming(_)
            | AppError::ImageShape { .. }
            | AppError::Nifti { .. }
            | AppError::ParseError { .. }
            | AppError::Template(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::InputNotFound(_)
            | AppError::MissingTools(_) => io::ErrorKind::NotFound,
            AppError::OutputExists(_) => io::ErrorKind::AlreadyExists,
            AppError::ToolLaunch { .. }
            | AppError::ToolFailed { .. }
            | AppError::MissingToolOutput(_) => io::ErrorKind::Other,
        }
    }
}
