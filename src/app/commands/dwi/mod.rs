//! BIDS diffusion preparation pipeline.
//!
//! Step 1 combines the two AP runs and isolates b0 references, step 2
//! prepares TOPUP inputs and its command line, step 3 prepares (and
//! optionally runs) TOPUP and EDDY.

mod combine;
mod eddy;
mod topup;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app::AppContext;
use crate::domain::tool::dwi_execute_tools;
use crate::domain::{AppError, BtoConfig, ToolInvocation};
use crate::ports::{ToolLocator, ToolRunner, VolumeStore};

/// Which steps to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwiMode {
    Step1,
    Step2,
    Step3,
    All,
}

impl DwiMode {
    fn runs_step3(&self) -> bool {
        matches!(self, DwiMode::Step3 | DwiMode::All)
    }

    pub fn banner(&self) -> &'static str {
        match self {
            DwiMode::Step1 => "[STEP 1] Combine/copy DWI and extract b0 images",
            DwiMode::Step2 => "[STEP 2] Prepare TOPUP input, parameter, config, and command",
            DwiMode::Step3 => "[STEP 3] Synthesize and/or execute TOPUP and EDDY",
            DwiMode::All => "[ALL STEPS] Running full pipeline: step-1 → step-2 → step-3",
        }
    }
}

impl FromStr for DwiMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step-1" => Ok(DwiMode::Step1),
            "step-2" => Ok(DwiMode::Step2),
            "step-3" => Ok(DwiMode::Step3),
            "all" => Ok(DwiMode::All),
            other => Err(AppError::ParseError {
                what: "mode".to_string(),
                details: format!("'{}' (expected step-1, step-2, step-3 or all)", other),
            }),
        }
    }
}

impl fmt::Display for DwiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DwiMode::Step1 => "step-1",
            DwiMode::Step2 => "step-2",
            DwiMode::Step3 => "step-3",
            DwiMode::All => "all",
        })
    }
}

#[derive(Debug, Clone)]
pub struct DwiOptions {
    pub mode: DwiMode,
    pub bids_dir: PathBuf,
    /// Run TOPUP, EDDY and magnitude preprocessing instead of only writing
    /// their command lines.
    pub execute: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DwiOutcome {
    /// Sessions whose AP runs were combined in step 1.
    pub combined: Vec<PathBuf>,
    /// TOPUP command files written in step 2.
    pub topup_commands: Vec<PathBuf>,
    /// EDDY command files written in step 3.
    pub eddy_commands: Vec<PathBuf>,
    /// External commands that exited unsuccessfully.
    pub failed_commands: Vec<String>,
}

impl DwiOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.failed_commands.is_empty() { 0 } else { 1 }
    }
}

pub fn execute<R, V, L>(
    ctx: &AppContext<R, V, L>,
    options: DwiOptions,
) -> Result<DwiOutcome, AppError>
where
    R: ToolRunner,
    V: VolumeStore,
    L: ToolLocator,
{
    if !options.bids_dir.is_dir() {
        return Err(AppError::NotADirectory(options.bids_dir.display().to_string()));
    }
    let bids_dir = fs::canonicalize(&options.bids_dir)?;

    if options.execute && options.mode.runs_step3() {
        check_required_tools(ctx.locator(), ctx.config())?;
    }

    let mut outcome = DwiOutcome::default();
    match options.mode {
        DwiMode::Step1 => combine::run(ctx, &bids_dir, &mut outcome)?,
        DwiMode::Step2 => topup::run(ctx, &bids_dir, &mut outcome)?,
        DwiMode::Step3 => eddy::run(ctx, &bids_dir, options.execute, &mut outcome)?,
        DwiMode::All => {
            combine::run(ctx, &bids_dir, &mut outcome)?;
            topup::run(ctx, &bids_dir, &mut outcome)?;
            eddy::run(ctx, &bids_dir, options.execute, &mut outcome)?;
        }
    }
    Ok(outcome)
}

/// Fail with the list of tools the executing pipeline cannot find.
pub fn check_required_tools<L: ToolLocator>(
    locator: &L,
    config: &BtoConfig,
) -> Result<(), AppError> {
    let missing: Vec<String> = dwi_execute_tools(&config.eddy.binary)
        .iter()
        .filter(|req| locator.resolve(req).is_none())
        .map(|req| req.label())
        .collect();
    if missing.is_empty() { Ok(()) } else { Err(AppError::MissingTools(missing.join(", "))) }
}

/// Copy `src` to `dest`, warning instead of failing when `src` is absent.
fn copy_if_present(src: &Path, dest: &Path) -> Result<bool, AppError> {
    if !src.exists() {
        eprintln!("⚠️  {} missing (not copied)", src.display());
        return Ok(false);
    }
    fs::copy(src, dest)?;
    println!("Copied {} -> {}", src.display(), dest.display());
    Ok(true)
}

/// Run one external command, recording a failure instead of aborting.
fn run_tool<R: ToolRunner>(runner: &R, invocation: &ToolInvocation, outcome: &mut DwiOutcome) {
    println!("Running:\n{}\n", invocation);
    match runner.run(invocation) {
        Ok(status) if status.is_success() => println!("Success.\n"),
        Ok(status) => {
            eprintln!("Command failed: {}\n", status);
            outcome.failed_commands.push(invocation.to_string());
        }
        Err(err) => {
            eprintln!("Command failed: {}\n", err);
            outcome.failed_commands.push(invocation.to_string());
        }
    }
}

fn read_sidecar(path: &Path) -> Result<serde_json::Value, AppError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
