//! Field-of-view cropping with `robustfov`.

use std::path::PathBuf;

use super::{WrapOutcome, arg, claim_output, nifti_input, produce};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

/// `robustfov` default brain size in mm.
pub const DEFAULT_BRAIN_SIZE_MM: u32 = 170;

#[derive(Debug, Clone)]
pub struct FovOptions {
    pub input: PathBuf,
    /// Size of the brain along z, in mm.
    pub brain_size: u32,
    pub force: bool,
}

pub fn execute<R: ToolRunner>(runner: &R, options: FovOptions) -> Result<WrapOutcome, AppError> {
    if options.brain_size == 0 {
        return Err(AppError::config_error("--brain-size must be positive"));
    }
    let name = nifti_input(&options.input)?;
    let output = name.with_suffix(suffix::FOV);
    claim_output(&output, options.force)?;

    let invocation = ToolInvocation::new(
        "robustfov",
        [
            "-i".to_string(),
            arg(&options.input),
            "-r".into(),
            arg(&output),
            "-b".into(),
            options.brain_size.to_string(),
        ],
    );
    produce(runner, &invocation, &output)?;
    Ok(WrapOutcome::single(output))
}
