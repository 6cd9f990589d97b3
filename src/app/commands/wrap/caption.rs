//! Figure captioning with ImageMagick `convert`.

use std::path::{Path, PathBuf};

use super::{WrapOutcome, arg, claim_output, produce};
use crate::domain::naming::suffix;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

pub const DEFAULT_POINTSIZE: u32 = 24;
const DEFAULT_EXTENSION: &str = "png";

#[derive(Debug, Clone)]
pub struct CaptionOptions {
    pub input: PathBuf,
    pub text: String,
    /// Defaults to `<stem>_caption.<ext>` next to the input.
    pub output: Option<PathBuf>,
    pub pointsize: u32,
    pub force: bool,
}

/// Append a text label below the image.
pub fn execute<R: ToolRunner>(
    runner: &R,
    options: CaptionOptions,
) -> Result<WrapOutcome, AppError> {
    if !options.input.is_file() {
        return Err(AppError::InputNotFound(options.input.display().to_string()));
    }
    if options.text.trim().is_empty() {
        return Err(AppError::config_error("caption text must not be empty"));
    }
    if options.pointsize == 0 {
        return Err(AppError::config_error("--pointsize must be positive"));
    }
    let output = options.output.clone().unwrap_or_else(|| default_output(&options.input));
    if output == options.input {
        return Err(AppError::config_error("caption output would replace its input"));
    }
    claim_output(&output, options.force)?;

    let invocation = ToolInvocation::new(
        "convert",
        [
            arg(&options.input),
            "-background".into(),
            "white".into(),
            "-fill".into(),
            "black".into(),
            "-pointsize".into(),
            options.pointsize.to_string(),
            label(&options.text),
            "-gravity".into(),
            "center".into(),
            "-append".into(),
            arg(&output),
        ],
    );
    produce(runner, &invocation, &output)?;
    Ok(WrapOutcome::single(output))
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    input.with_file_name(format!("{}{}.{}", stem, suffix::CAPTIONED, extension))
}

/// `label:` operand showing `text` literally.
///
/// ImageMagick reads a file for a leading `@` and expands `%` escapes.
fn label(text: &str) -> String {
    let escaped = text.replace('%', "%%");
    match escaped.strip_prefix('@') {
        Some(rest) => format!("label:\\@{}", rest),
        None => format!("label:{}", escaped),
    }
}
