//! Single-tool wrappers: validate the input, derive the output name and
//! run the external tool.

pub mod afni;
pub mod autobox;
pub mod biascorr;
pub mod caption;
pub mod fov;
pub mod motion;
pub mod skullstrip;

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ImageName, ToolInvocation};
use crate::ports::ToolRunner;

/// Result of a wrapper run.
#[derive(Debug, Clone, Default)]
pub struct WrapOutcome {
    /// Outputs that were produced.
    pub outputs: Vec<PathBuf>,
    /// Inputs that failed in batch mode, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl WrapOutcome {
    pub fn single(output: PathBuf) -> Self {
        Self { outputs: vec![output], failed: Vec::new() }
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed.is_empty() { 0 } else { 1 }
    }
}

/// Existing NIfTI input.
fn nifti_input(path: &Path) -> Result<ImageName, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }
    let name = ImageName::parse(path)?;
    if !name.is_nifti() {
        return Err(AppError::InvalidImageName(path.display().to_string()));
    }
    Ok(name)
}

/// Refuse to clobber `output` unless forced; a forced output is removed
/// first since some tools refuse to overwrite.
fn claim_output(output: &Path, force: bool) -> Result<(), AppError> {
    if !output.exists() {
        return Ok(());
    }
    if !force {
        return Err(AppError::OutputExists(output.display().to_string()));
    }
    tracing::debug!(path = %output.display(), "removing existing output");
    fs::remove_file(output)?;
    Ok(())
}

/// Run `invocation` and require it to succeed and produce `output`.
fn run_for_output<R: ToolRunner>(
    runner: &R,
    invocation: &ToolInvocation,
    output: &Path,
) -> Result<(), AppError> {
    println!("Running: {}", invocation);
    let status = runner.run(invocation)?;
    if !status.is_success() {
        return Err(AppError::ToolFailed {
            command: invocation.program().to_string(),
            status: status.to_string(),
        });
    }
    if !output.exists() {
        return Err(AppError::MissingToolOutput(output.display().to_string()));
    }
    Ok(())
}

/// `run_for_output` for a file the user asked for.
fn produce<R: ToolRunner>(
    runner: &R,
    invocation: &ToolInvocation,
    output: &Path,
) -> Result<(), AppError> {
    run_for_output(runner, invocation, output)?;
    wrote(output);
    Ok(())
}

fn wrote(output: &Path) {
    println!("✅ Wrote {}", output.display());
}

fn arg(path: &Path) -> String {
    path.display().to_string()
}
