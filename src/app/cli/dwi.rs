//! DWI pipeline command implementation.

use std::path::Path;

use crate::app::api::{self, DwiOptions};
use crate::domain::AppError;

pub fn run_dwi(options: DwiOptions, config: Option<&Path>) -> Result<i32, AppError> {
    println!("{}", options.mode.banner());
    let execute = options.execute;
    let outcome = api::dwi(options, config)?;

    if !outcome.combined.is_empty() {
        println!("✅ Combined AP runs in {} session(s)", outcome.combined.len());
    }
    if !outcome.topup_commands.is_empty() {
        println!("✅ Wrote {} TOPUP command file(s)", outcome.topup_commands.len());
    }
    if !outcome.eddy_commands.is_empty() {
        println!("✅ Wrote {} EDDY command file(s)", outcome.eddy_commands.len());
        if !execute {
            println!("  Re-run with --execute to run TOPUP and EDDY");
        }
    }
    if !outcome.failed_commands.is_empty() {
        eprintln!("⚠️  {} external command(s) failed:", outcome.failed_commands.len());
        for command in &outcome.failed_commands {
            eprintln!("  • {}", command);
        }
    }
    Ok(outcome.exit_code())
}
