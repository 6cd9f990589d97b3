//! Bias-field correction with FSL `fast`.

use std::fs;
use std::path::{Path, PathBuf};

use super::{WrapOutcome, arg, claim_output, nifti_input, run_for_output, wrote};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

const FAST_ARGS: [&str; 11] = ["-t", "1", "-n", "3", "-H", "0.1", "-I", "4", "-l", "20.0", "-B"];
const RESTORED_TAIL: &str = "_restore.nii.gz";

#[derive(Debug, Clone)]
pub struct BiasCorrOptions {
    pub input: PathBuf,
    pub force: bool,
}

pub fn execute<R: ToolRunner>(runner: &R, options: BiasCorrOptions) -> Result<WrapOutcome, AppError> {
    let name = nifti_input(&options.input)?;
    let output = name.with_suffix(suffix::BIAS_CORRECTED);
    claim_output(&output, options.force)?;

    // Same filesystem as the output so the final rename cannot cross devices.
    let parent = output.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let work = tempfile::Builder::new().prefix(".bto-biascorr-").tempdir_in(parent)?;
    let base = work.path().join(name.stem());

    let mut args: Vec<String> = FAST_ARGS.iter().map(|a| a.to_string()).collect();
    args.extend(["-o".to_string(), arg(&base), arg(&options.input)]);
    let invocation = ToolInvocation::new("fast", args);

    let restored = work.path().join(format!("{}{}", name.stem(), RESTORED_TAIL));
    run_for_output(runner, &invocation, &restored)?;
    fs::rename(&restored, &output)?;
    wrote(&output);

    // Dropping `work` removes the remaining fast outputs.
    Ok(WrapOutcome::single(output))
}
