//! Batch AFNI to NIfTI conversion.

use std::path::{Path, PathBuf};

use super::{WrapOutcome, arg, claim_output, produce};
use crate::domain::{AppError, ImageName, ToolInvocation};
use crate::ports::ToolRunner;

#[derive(Debug, Clone)]
pub struct Afni2NiftiOptions {
    pub inputs: Vec<PathBuf>,
    pub force: bool,
}

/// Convert every input; a failing input is reported and the batch goes on.
pub fn execute<R: ToolRunner>(
    runner: &R,
    options: Afni2NiftiOptions,
) -> Result<WrapOutcome, AppError> {
    let mut outcome = WrapOutcome::default();
    for input in &options.inputs {
        match convert(runner, input, options.force) {
            Ok(output) => outcome.outputs.push(output),
            Err(err) => {
                eprintln!("⚠️  {}: {}", input.display(), err);
                outcome.failed.push((input.clone(), err.to_string()));
            }
        }
    }
    if !outcome.failed.is_empty() {
        eprintln!("{} of {} conversion(s) failed.", outcome.failed.len(), options.inputs.len());
    }
    Ok(outcome)
}

fn convert<R: ToolRunner>(runner: &R, input: &Path, force: bool) -> Result<PathBuf, AppError> {
    if !input.exists() {
        return Err(AppError::InputNotFound(input.display().to_string()));
    }
    let name = ImageName::parse(input)?;
    if !name.is_afni() {
        return Err(AppError::InvalidImageName(input.display().to_string()));
    }
    let output = name.as_nifti_gz();
    claim_output(&output, force)?;

    let invocation = ToolInvocation::new("3dAFNItoNIFTI", ["-prefix".to_string(), arg(&output), arg(input)]);
    produce(runner, &invocation, &output)?;
    Ok(output)
}
