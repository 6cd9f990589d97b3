//! Volume-by-volume rigid motion correction with FSL tools.
//!
//! The series is split into volumes, each volume is registered to the
//! reference volume with `flirt`, the registered volumes are merged back
//! and every registration matrix is decomposed with `avscale` into a
//! `.par` motion table.

use std::fs;
use std::path::{Path, PathBuf};

use super::{WrapOutcome, arg, claim_output, nifti_input, produce, run_for_output, wrote};
use crate::domain::motion::{MotionParams, par_table};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

pub const DEFAULT_DOF: u32 = 6;
const ALLOWED_DOF: [u32; 4] = [6, 7, 9, 12];
const SPLIT_PREFIX: &str = "vol";
const PAR_EXTENSION: &str = "par";

#[derive(Debug, Clone)]
pub struct MotionCorrOptions {
    pub input: PathBuf,
    /// Zero-based index of the volume every other volume is registered to.
    pub reference: usize,
    /// Degrees of freedom of each registration.
    pub dof: u32,
    pub force: bool,
}

pub fn execute<R: ToolRunner>(
    runner: &R,
    options: MotionCorrOptions,
) -> Result<WrapOutcome, AppError> {
    if !ALLOWED_DOF.contains(&options.dof) {
        return Err(AppError::config_error(format!(
            "--dof must be one of 6, 7, 9 or 12 (got {})",
            options.dof
        )));
    }
    let name = nifti_input(&options.input)?;
    let output = name.with_suffix(suffix::MOTION_CORRECTED);
    let par = name.sidecar(suffix::MOTION_CORRECTED, PAR_EXTENSION);
    claim_output(&output, options.force)?;
    claim_output(&par, options.force)?;

    let parent = output.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let work = tempfile::Builder::new().prefix(".bto-mc-").tempdir_in(parent)?;

    let volumes = split(runner, &options.input, work.path())?;
    let Some(reference) = volumes.get(options.reference) else {
        return Err(AppError::ImageShape {
            path: options.input.display().to_string(),
            details: format!(
                "reference volume {} out of range ({} volumes)",
                options.reference,
                volumes.len()
            ),
        });
    };

    let mut registered = Vec::with_capacity(volumes.len());
    let mut params = Vec::with_capacity(volumes.len());
    for (index, volume) in volumes.iter().enumerate() {
        let out = work.path().join(format!("mc{:04}.nii.gz", index));
        let mat = work.path().join(format!("mc{:04}.mat", index));
        let flirt = ToolInvocation::new(
            "flirt",
            [
                "-in".to_string(),
                arg(volume),
                "-ref".into(),
                arg(reference),
                "-out".into(),
                arg(&out),
                "-omat".into(),
                arg(&mat),
                "-dof".into(),
                options.dof.to_string(),
                "-nosearch".into(),
            ],
        );
        run_for_output(runner, &flirt, &out)?;
        if !mat.exists() {
            return Err(AppError::MissingToolOutput(mat.display().to_string()));
        }
        params.push(motion_params(runner, &mat, reference)?);
        registered.push(out);
    }

    let mut merge_args = vec!["-t".to_string(), arg(&output)];
    merge_args.extend(registered.iter().map(|p| arg(p)));
    produce(runner, &ToolInvocation::new("fslmerge", merge_args), &output)?;

    fs::write(&par, par_table(&params))?;
    wrote(&par);

    // Dropping `work` removes the split and registered volumes.
    Ok(WrapOutcome { outputs: vec![output, par], failed: Vec::new() })
}

/// Split `input` into `<work>/vol0000.nii.gz`, ... and list them in order.
fn split<R: ToolRunner>(runner: &R, input: &Path, work: &Path) -> Result<Vec<PathBuf>, AppError> {
    let base = work.join(SPLIT_PREFIX);
    let invocation = ToolInvocation::new("fslsplit", [arg(input), arg(&base), "-t".to_string()]);
    run_for_output(runner, &invocation, &work.join(format!("{}0000.nii.gz", SPLIT_PREFIX)))?;

    let mut volumes: Vec<PathBuf> = fs::read_dir(work)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(SPLIT_PREFIX) && n.ends_with(".nii.gz"))
        })
        .collect();
    volumes.sort();
    Ok(volumes)
}

fn motion_params<R: ToolRunner>(
    runner: &R,
    mat: &Path,
    reference: &Path,
) -> Result<MotionParams, AppError> {
    let invocation =
        ToolInvocation::new("avscale", ["--allparams".to_string(), arg(mat), arg(reference)]);
    tracing::debug!(command = %invocation, "decomposing registration matrix");
    let output = runner.capture(&invocation)?;
    if !output.status.is_success() {
        return Err(AppError::ToolFailed {
            command: invocation.program().to_string(),
            status: output.status.to_string(),
        });
    }
    MotionParams::from_avscale(&output.stdout)
}
