//! Acquisition parameter and index files for TOPUP and EDDY.

use serde_json::{Number, Value};

use super::AppError;

/// Phase-encoding direction of a b0 series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEncoding {
    /// Anterior to posterior (`0 -1 0`).
    Ap,
    /// Posterior to anterior (`0 1 0`).
    Pa,
}

impl PhaseEncoding {
    fn vector(&self) -> &'static str {
        match self {
            PhaseEncoding::Ap => "0 -1 0",
            PhaseEncoding::Pa => "0 1 0",
        }
    }
}

/// `TotalReadoutTime` kept as the JSON number it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutTime(Number);

impl ReadoutTime {
    /// Read `TotalReadoutTime` from a BIDS sidecar; `None` when absent.
    pub fn from_sidecar(sidecar: &Value) -> Result<Option<Self>, AppError> {
        match sidecar.get("TotalReadoutTime") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(Self(n.clone()))),
            Some(other) => Err(AppError::ParseError {
                what: "TotalReadoutTime".to_string(),
                details: format!("expected a number, found {}", other),
            }),
        }
    }
}

impl std::fmt::Display for ReadoutTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// TOPUP `--datain` body: AP lines first, then PA lines.
pub fn topup_params(n_ap: usize, n_pa: usize, trt: &ReadoutTime) -> String {
    let line = |pe: PhaseEncoding| format!("{} {}\n", pe.vector(), trt);
    let mut out = line(PhaseEncoding::Ap).repeat(n_ap);
    out.push_str(&line(PhaseEncoding::Pa).repeat(n_pa));
    out
}

/// EDDY `--index` body: every volume refers to the first acquisition line.
pub fn eddy_indices(nvols: usize) -> String {
    format!("{}\n", vec!["1"; nvols].join(" "))
}

/// Read `SliceTiming` from a BIDS sidecar; `None` when absent.
pub fn slice_timing(sidecar: &Value) -> Result<Option<Vec<f64>>, AppError> {
    let Some(value) = sidecar.get("SliceTiming") else {
        return Ok(None);
    };
    let invalid = || AppError::ParseError {
        what: "SliceTiming".to_string(),
        details: "expected an array of numbers".to_string(),
    };
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_f64().ok_or_else(invalid))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
