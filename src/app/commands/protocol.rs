//! MESMERISED protocol to FSL gradient files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::protocol::{AxisFlip, BvalNaming, Echo, ProtocolTable, UTF7_UNDERSCORE};

#[derive(Debug, Clone)]
pub struct ProtocolOptions {
    pub input: PathBuf,
    pub axis: AxisFlip,
    pub save_orig: bool,
    pub naming: BvalNaming,
}

/// Files written by a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolOutcome {
    /// Input path after any rename.
    pub input: PathBuf,
    pub bvec: PathBuf,
    pub orig_bvec: Option<PathBuf>,
    pub bval_se: PathBuf,
    pub bval_ste: PathBuf,
}

pub fn execute(options: ProtocolOptions) -> Result<ProtocolOutcome, AppError> {
    if !options.input.is_file() {
        return Err(AppError::InputNotFound(options.input.display().to_string()));
    }
    println!("Input file : {}", options.input.display());
    let input = normalize_name(&options.input)?;

    let mut table = ProtocolTable::parse(&fs::read_to_string(&input)?)?;
    tracing::debug!(rows = table.len(), "parsed protocol table");

    let base = output_base(&input);
    let orig_bvecs = table.bvecs_text();
    println!("orig bvecs :\n{}", orig_bvecs);
    let orig_bvec = if options.save_orig {
        let path = with_tail(&base, "_orig.bvec");
        fs::write(&path, &orig_bvecs)?;
        println!("orig bvecs file : {}\n", path.display());
        Some(path)
    } else {
        None
    };

    println!("Multiplying -1.0 to axis : {}\n", options.axis);
    table.flip_axis(options.axis)?;

    let bvec = with_tail(&base, ".bvec");
    let bvecs = table.bvecs_text();
    fs::write(&bvec, &bvecs)?;
    println!("bvecs :\n{}", bvecs);
    println!("bvecs file : {}\n", bvec.display());

    let write_bvals = |echo: Echo| -> Result<PathBuf, AppError> {
        let path = with_tail(&base, options.naming.suffix(echo));
        let text = table.bvals_text(echo);
        fs::write(&path, &text)?;
        let label = options.naming.label(echo);
        println!("bvals {} :\n{}", label, text);
        println!("bvals {} file : {}\n", label, path.display());
        Ok(path)
    };
    let bval_se = write_bvals(Echo::SpinEcho)?;
    let bval_ste = write_bvals(Echo::StimulatedEcho)?;

    Ok(ProtocolOutcome { input, bvec, orig_bvec, bval_se, bval_ste })
}

/// Rename `input` on disk when its name carries the UTF-7 underscore.
fn normalize_name(input: &Path) -> Result<PathBuf, AppError> {
    let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
        return Ok(input.to_path_buf());
    };
    if !name.contains(UTF7_UNDERSCORE) {
        return Ok(input.to_path_buf());
    }
    let renamed = input.with_file_name(name.replace(UTF7_UNDERSCORE, "_"));
    fs::rename(input, &renamed)?;
    println!("Renamed file : {}\n", renamed.display());
    Ok(renamed)
}

/// Input path without its `.txt` extension (or without any extension).
fn output_base(input: &Path) -> PathBuf {
    let name = input.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    match name.strip_suffix(".txt") {
        Some(stem) => input.with_file_name(stem),
        None => input.with_extension(""),
    }
}

fn with_tail(base: &Path, tail: &str) -> PathBuf {
    let mut name = base.file_name().unwrap_or_default().to_os_string();
    name.push(tail);
    base.with_file_name(name)
}
