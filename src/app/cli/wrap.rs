//! Wrapper command implementations.

use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api::{
    self, Afni2NiftiOptions, AutoboxOptions, BiasCorrOptions, CaptionOptions, FovOptions,
    MotionCorrOptions, SkullStripMethod, SkullStripOptions, WrapOutcome,
};
use crate::app::commands::wrap::caption::DEFAULT_POINTSIZE;
use crate::app::commands::wrap::fov::DEFAULT_BRAIN_SIZE_MM;
use crate::app::commands::wrap::motion::DEFAULT_DOF;
use crate::app::commands::wrap::skullstrip::DEFAULT_FRAC;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum WrapCommands {
    /// Convert AFNI datasets to .nii.gz next to each input
    #[clap(visible_alias = "a2n")]
    Afni2nifti {
        /// AFNI .HEAD/.BRIK inputs
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Remove non-brain tissue, writing <stem>_SS.nii.gz
    #[clap(visible_alias = "ss")]
    Skullstrip {
        /// NIfTI input
        input: PathBuf,
        /// Tool to use: afni, bet or synthstrip
        #[arg(short, long, default_value = "afni")]
        method: SkullStripMethod,
        /// Fractional intensity threshold for bet
        #[arg(long, default_value_t = DEFAULT_FRAC)]
        frac: f64,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Crop to the non-zero bounding box, writing <stem>_abox.nii.gz
    #[clap(visible_alias = "ab")]
    Autobox {
        /// NIfTI input
        input: PathBuf,
        /// Voxels of padding around the box
        #[arg(long, default_value_t = 0)]
        npad: u32,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Crop the field of view, writing <stem>_fov.nii.gz
    Fov {
        /// NIfTI input
        input: PathBuf,
        /// Brain size along z in mm
        #[arg(short, long, default_value_t = DEFAULT_BRAIN_SIZE_MM)]
        brain_size: u32,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Bias-field correct with FSL fast, writing <stem>_biascorr.nii.gz
    #[clap(visible_alias = "bc")]
    Biascorr {
        /// NIfTI input
        input: PathBuf,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Register each volume to a reference with FSL flirt, writing
    /// <stem>_mc.nii.gz and the <stem>_mc.par motion table
    #[clap(visible_alias = "mc")]
    Motioncorr {
        /// 4D NIfTI input
        input: PathBuf,
        /// Zero-based index of the reference volume
        #[arg(short, long, default_value_t = 0)]
        reference: usize,
        /// Registration degrees of freedom: 6, 7, 9 or 12
        #[arg(long, default_value_t = DEFAULT_DOF)]
        dof: u32,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
    /// Append a caption below a figure with ImageMagick convert
    #[clap(visible_alias = "cap")]
    Caption {
        /// Figure to caption
        input: PathBuf,
        /// Caption text
        #[arg(short, long)]
        text: String,
        /// Output file (defaults to <stem>_caption.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Font size in points
        #[arg(short, long, default_value_t = DEFAULT_POINTSIZE)]
        pointsize: u32,
        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run_wrap(command: WrapCommands) -> Result<i32, AppError> {
    let outcome: WrapOutcome = match command {
        WrapCommands::Afni2nifti { inputs, force } => {
            api::afni2nifti(Afni2NiftiOptions { inputs, force })?
        }
        WrapCommands::Skullstrip { input, method, frac, force } => {
            api::skullstrip(SkullStripOptions { input, method, frac, force })?
        }
        WrapCommands::Autobox { input, npad, force } => {
            api::autobox(AutoboxOptions { input, npad, force })?
        }
        WrapCommands::Fov { input, brain_size, force } => {
            api::fov(FovOptions { input, brain_size, force })?
        }
        WrapCommands::Biascorr { input, force } => api::biascorr(BiasCorrOptions { input, force })?,
        WrapCommands::Motioncorr { input, reference, dof, force } => {
            api::motioncorr(MotionCorrOptions { input, reference, dof, force })?
        }
        WrapCommands::Caption { input, text, output, pointsize, force } => {
            api::caption(CaptionOptions { input, text, output, pointsize, force })?
        }
    };

    if outcome.failed.is_empty() {
        println!("✅ Produced {} output(s)", outcome.outputs.len());
    }
    Ok(outcome.exit_code())
}
