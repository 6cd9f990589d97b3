//! Crop an image to its non-zero bounding box.

use std::path::PathBuf;

use super::{WrapOutcome, arg, claim_output, nifti_input, produce};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

#[derive(Debug, Clone)]
pub struct AutoboxOptions {
    pub input: PathBuf,
    /// Voxels of padding kept around the box.
    pub npad: u32,
    pub force: bool,
}

pub fn execute<R: ToolRunner>(runner: &R, options: AutoboxOptions) -> Result<WrapOutcome, AppError> {
    let name = nifti_input(&options.input)?;
    let output = name.with_suffix(suffix::AUTOBOX);
    claim_output(&output, options.force)?;

    let invocation = ToolInvocation::new(
        "3dAutobox",
        [
            "-input".to_string(),
            arg(&options.input),
            "-prefix".into(),
            arg(&output),
            "-npad".into(),
            options.npad.to_string(),
        ],
    );
    produce(runner, &invocation, &output)?;
    Ok(WrapOutcome::single(output))
}
