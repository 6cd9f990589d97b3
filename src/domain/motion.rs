//! Rigid-body motion parameters as reported by FSL `avscale --allparams`.

use super::AppError;

const ROTATION_LABEL: &str = "Rotation Angles (x,y,z) [rads]";
const TRANSLATION_LABEL: &str = "Translations (x,y,z) [mm]";

/// Rotations in radians and translations in millimetres of one volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub rotation: [f64; 3],
    pub translation: [f64; 3],
}

impl MotionParams {
    /// Pick the rotation and translation lines out of `avscale` output.
    pub fn from_avscale(text: &str) -> Result<Self, AppError> {
        Ok(Self {
            rotation: labelled_triple(text, ROTATION_LABEL)?,
            translation: labelled_triple(text, TRANSLATION_LABEL)?,
        })
    }

    /// One `.par` row: three rotations then three translations.
    pub fn to_par_row(&self) -> String {
        self.rotation
            .iter()
            .chain(&self.translation)
            .map(|v| format!("{:.6}", v))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Motion parameter table with one row per volume.
pub fn par_table(params: &[MotionParams]) -> String {
    params.iter().map(|p| format!("{}\n", p.to_par_row())).collect()
}

fn labelled_triple(text: &str, label: &str) -> Result<[f64; 3], AppError> {
    let parse_error = |details: String| AppError::ParseError {
        what: "avscale output".to_string(),
        details,
    };
    let values = text
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(label))
        .and_then(|rest| rest.trim_start().strip_prefix('='))
        .ok_or_else(|| parse_error(format!("no '{}' line", label)))?;

    let numbers = values
        .split_whitespace()
        .map(|token| token.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| parse_error(format!("{}: {}", label, e)))?;
    <[f64; 3]>::try_from(numbers.as_slice())
        .map_err(|_| parse_error(format!("{}: expected 3 values, got {}", label, numbers.len())))
}
