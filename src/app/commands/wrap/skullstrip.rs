//! Skull stripping through AFNI, FSL or FreeSurfer.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{WrapOutcome, arg, claim_output, nifti_input, produce};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

/// Tool used for brain extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkullStripMethod {
    /// `3dSkullStrip`
    #[default]
    Afni,
    /// `bet` with robust centre estimation.
    Bet,
    /// `mri_synthstrip`
    Synthstrip,
}

impl FromStr for SkullStripMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "afni" => Ok(SkullStripMethod::Afni),
            "bet" => Ok(SkullStripMethod::Bet),
            "synthstrip" => Ok(SkullStripMethod::Synthstrip),
            other => Err(AppError::ParseError {
                what: "method".to_string(),
                details: format!("'{}' (expected afni, bet or synthstrip)", other),
            }),
        }
    }
}

impl fmt::Display for SkullStripMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkullStripMethod::Afni => "afni",
            SkullStripMethod::Bet => "bet",
            SkullStripMethod::Synthstrip => "synthstrip",
        })
    }
}

/// Default `bet -f` fractional intensity threshold.
pub const DEFAULT_FRAC: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct SkullStripOptions {
    pub input: PathBuf,
    pub method: SkullStripMethod,
    /// Only used by `bet`.
    pub frac: f64,
    pub force: bool,
}

pub fn execute<R: ToolRunner>(
    runner: &R,
    options: SkullStripOptions,
) -> Result<WrapOutcome, AppError> {
    if !(0.0..=1.0).contains(&options.frac) {
        return Err(AppError::config_error(format!(
            "--frac must be between 0 and 1, got {}",
            options.frac
        )));
    }
    let name = nifti_input(&options.input)?;
    let output = name.with_suffix(suffix::SKULL_STRIPPED);
    claim_output(&output, options.force)?;

    let (input, out) = (arg(&options.input), arg(&output));
    let invocation = match options.method {
        SkullStripMethod::Afni => {
            ToolInvocation::new("3dSkullStrip", ["-input".to_string(), input, "-prefix".into(), out])
        }
        SkullStripMethod::Bet => ToolInvocation::new(
            "bet",
            [input, out, "-f".into(), options.frac.to_string(), "-R".into()],
        ),
        SkullStripMethod::Synthstrip => {
            ToolInvocation::new("mri_synthstrip", ["-i".to_string(), input, "-o".into(), out])
        }
    };
    tracing::debug!(method = %options.method, "skull stripping");
    produce(runner, &invocation, &output)?;
    Ok(WrapOutcome::single(output))
}
