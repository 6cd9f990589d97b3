//! CLI Adapter.

mod doctor;
mod dwi;
mod wrap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api;
use crate::domain::AppError;
use crate::domain::protocol::{AxisFlip, BvalNaming};

const DEFAULT_LOG_DIRECTIVE: &str = "bto=warn";

#[derive(Parser)]
#[command(name = "bto")]
#[command(version)]
#[command(
    about = "Orchestrate AFNI, FSL and FreeSurfer tools over MRI datasets",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./bto.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare BIDS diffusion data for TOPUP and EDDY
    #[clap(visible_alias = "d")]
    Dwi {
        /// Pipeline step: step-1, step-2, step-3 or all
        #[arg(short, long)]
        mode: api::DwiMode,
        /// Root BIDS directory (with sub-XX/ses-YY)
        bids_dir: PathBuf,
        /// Run TOPUP, EDDY and magnitude preprocessing instead of only writing commands
        #[arg(long)]
        execute: bool,
    },
    /// Convert a MESMERISED protocol file to FSL .bvec/.bval files
    #[clap(visible_alias = "p")]
    Protocol {
        /// MESMERISED protocol text file
        #[arg(short, long)]
        input: PathBuf,
        /// Gradient axis to negate: gx, gy, gz or none
        #[arg(short, long, default_value = "gy")]
        axis: AxisFlip,
        /// Also write the unflipped bvecs as <name>_orig.bvec
        #[arg(short, long)]
        save_orig: bool,
        /// bval file naming: se-ste (_SE/_STE) or echo (_Echo_0/_Echo_1)
        #[arg(short, long, default_value = "se-ste")]
        naming: BvalNaming,
    },
    /// Summarize subjects, sessions and data types of a BIDS directory
    #[clap(visible_alias = "sc")]
    Scan {
        /// Top-level BIDS directory
        bids_dir: PathBuf,
    },
    /// Thin wrappers over single external tools
    #[clap(visible_alias = "w")]
    Wrap {
        #[command(subcommand)]
        command: wrap::WrapCommands,
    },
    /// Check that the external toolchain is installed
    Doctor,
}

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    // A subscriber may already be installed when embedded in another process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::Dwi { mode, bids_dir, execute } => {
            dwi::run_dwi(api::DwiOptions { mode, bids_dir, execute }, config)
        }
        Commands::Protocol { input, axis, save_orig, naming } => {
            run_protocol(api::ProtocolOptions { input, axis, save_orig, naming }).map(|_| 0)
        }
        Commands::Scan { bids_dir } => run_scan(bids_dir).map(|_| 0),
        Commands::Wrap { command } => wrap::run_wrap(command),
        Commands::Doctor => doctor::run_doctor(config),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_protocol(options: api::ProtocolOptions) -> Result<(), AppError> {
    let outcome = api::protocol(options)?;
    let written = 3 + usize::from(outcome.orig_bvec.is_some());
    println!("✅ Wrote {} gradient file(s) from {}", written, outcome.input.display());
    Ok(())
}

fn run_scan(bids_dir: PathBuf) -> Result<(), AppError> {
    let outcome = api::scan(&bids_dir)?;
    println!(
        "Summary written to {}\n\n--- BIDS Summary Log ---\n",
        outcome.log_path.display()
    );
    println!("{}", outcome.summary.render());
    Ok(())
}
