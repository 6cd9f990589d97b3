//! API Facade for the application.
//!
//! Each function wires the real adapters into one command.

use std::path::Path;

use crate::adapters::{NiftiVolumeStore, PathToolLocator, ProcessToolRunner};
use crate::app::commands::wrap::{afni, autobox, biascorr, caption, fov, motion, skullstrip};
use crate::app::commands::{doctor, dwi, protocol, scan};
use crate::app::{AppContext, config::load_config};

pub use crate::app::commands::doctor::{DoctorOutcome, ToolCheck};
pub use crate::app::commands::dwi::{DwiMode, DwiOptions, DwiOutcome};
pub use crate::app::commands::protocol::{ProtocolOptions, ProtocolOutcome};
pub use crate::app::commands::scan::ScanOutcome;
pub use crate::app::commands::wrap::WrapOutcome;
pub use crate::app::commands::wrap::afni::Afni2NiftiOptions;
pub use crate::app::commands::wrap::autobox::AutoboxOptions;
pub use crate::app::commands::wrap::biascorr::BiasCorrOptions;
pub use crate::app::commands::wrap::caption::CaptionOptions;
pub use crate::app::commands::wrap::fov::FovOptions;
pub use crate::app::commands::wrap::motion::MotionCorrOptions;
pub use crate::app::commands::wrap::skullstrip::{SkullStripMethod, SkullStripOptions};
pub use crate::domain::AppError;

type LiveContext = AppContext<ProcessToolRunner, NiftiVolumeStore, PathToolLocator>;

/// Create an `AppContext` with configuration resolved from `config` or the
/// current directory.
fn create_context(config: Option<&Path>) -> Result<LiveContext, AppError> {
    let config = load_config(config, &std::env::current_dir()?)?;
    Ok(AppContext::new(
        ProcessToolRunner::new(),
        NiftiVolumeStore::new(),
        PathToolLocator::from_env(),
        config,
    ))
}

// =============================================================================
// DWI Pipeline API
// =============================================================================

/// Run one or all steps of the BIDS diffusion preparation pipeline.
pub fn dwi(options: DwiOptions, config: Option<&Path>) -> Result<DwiOutcome, AppError> {
    let ctx = create_context(config)?;
    dwi::execute(&ctx, options)
}

// =============================================================================
// Dataset Utilities API
// =============================================================================

/// Convert a MESMERISED protocol file into `.bvec`/`.bval` files.
pub fn protocol(options: ProtocolOptions) -> Result<ProtocolOutcome, AppError> {
    protocol::execute(options)
}

/// Summarize a BIDS dataset and write `bids_summary.log` at its root.
pub fn scan(bids_dir: &Path) -> Result<ScanOutcome, AppError> {
    scan::execute(bids_dir)
}

// =============================================================================
// Wrapper API
// =============================================================================

pub fn afni2nifti(options: Afni2NiftiOptions) -> Result<WrapOutcome, AppError> {
    afni::execute(&ProcessToolRunner::new(), options)
}

pub fn skullstrip(options: SkullStripOptions) -> Result<WrapOutcome, AppError> {
    skullstrip::execute(&ProcessToolRunner::new(), options)
}

pub fn autobox(options: AutoboxOptions) -> Result<WrapOutcome, AppError> {
    autobox::execute(&ProcessToolRunner::new(), options)
}

pub fn fov(options: FovOptions) -> Result<WrapOutcome, AppError> {
    fov::execute(&ProcessToolRunner::new(), options)
}

pub fn biascorr(options: BiasCorrOptions) -> Result<WrapOutcome, AppError> {
    biascorr::execute(&ProcessToolRunner::new(), options)
}

/// Register every volume of a series to a reference volume and write the
/// merged series plus its `.par` motion table.
pub fn motioncorr(options: MotionCorrOptions) -> Result<WrapOutcome, AppError> {
    motion::execute(&ProcessToolRunner::new(), options)
}

/// Append a caption below a figure.
pub fn caption(options: CaptionOptions) -> Result<WrapOutcome, AppError> {
    caption::execute(&ProcessToolRunner::new(), options)
}

// =============================================================================
// Doctor Command API
// =============================================================================

/// Report which external tools and toolchain variables are available.
pub fn doctor(config: Option<&Path>) -> Result<DoctorOutcome, AppError> {
    let ctx = create_context(config)?;
    doctor::execute(ctx.locator(), ctx.config())
}
