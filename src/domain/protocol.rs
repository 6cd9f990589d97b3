//! MESMERISED protocol tables.
//!
//! A protocol file is a whitespace (or comma) separated table whose header
//! row may be commented with `#`. The first three columns hold the gradient
//! direction, the fourth and fifth the spin-echo and stimulated-echo
//! b-values in s/m^2.

use std::fmt;
use std::str::FromStr;

use super::AppError;

/// UTF-7 encoding of `_` left behind by some scanner exports.
pub const UTF7_UNDERSCORE: &str = "+AF8-";

const MIN_COLUMNS: usize = 5;
const SE_COLUMN: usize = 3;
const STE_COLUMN: usize = 4;
const S_PER_M2_TO_S_PER_MM2: f64 = 1e6;

/// Gradient axis whose sign is flipped before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFlip {
    Gx,
    Gy,
    Gz,
    None,
}

impl AxisFlip {
    pub fn column_name(&self) -> Option<&'static str> {
        match self {
            AxisFlip::Gx => Some("gx"),
            AxisFlip::Gy => Some("gy"),
            AxisFlip::Gz => Some("gz"),
            AxisFlip::None => None,
        }
    }
}

impl FromStr for AxisFlip {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gx" => Ok(AxisFlip::Gx),
            "gy" => Ok(AxisFlip::Gy),
            "gz" => Ok(AxisFlip::Gz),
            "none" => Ok(AxisFlip::None),
            other => Err(AppError::ParseError {
                what: "axis".to_string(),
                details: format!("'{}' (expected gx, gy, gz or none)", other),
            }),
        }
    }
}

impl fmt::Display for AxisFlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name().unwrap_or("none"))
    }
}

/// Which b-value column is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    SpinEcho,
    StimulatedEcho,
}

/// File suffixes for the two b-value outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BvalNaming {
    /// `_SE.bval` / `_STE.bval`
    #[default]
    SeSte,
    /// `_Echo_0.bval` / `_Echo_1.bval`
    Echo,
}

impl BvalNaming {
    pub fn suffix(&self, echo: Echo) -> &'static str {
        match (self, echo) {
            (BvalNaming::SeSte, Echo::SpinEcho) => "_SE.bval",
            (BvalNaming::SeSte, Echo::StimulatedEcho) => "_STE.bval",
            (BvalNaming::Echo, Echo::SpinEcho) => "_Echo_0.bval",
            (BvalNaming::Echo, Echo::StimulatedEcho) => "_Echo_1.bval",
        }
    }

    pub fn label(&self, echo: Echo) -> &'static str {
        match (self, echo) {
            (BvalNaming::SeSte, Echo::SpinEcho) => "SE",
            (BvalNaming::SeSte, Echo::StimulatedEcho) => "STE",
            (BvalNaming::Echo, Echo::SpinEcho) => "Echo_0",
            (BvalNaming::Echo, Echo::StimulatedEcho) => "Echo_1",
        }
    }
}

impl FromStr for BvalNaming {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "se-ste" => Ok(BvalNaming::SeSte),
            "echo" => Ok(BvalNaming::Echo),
            other => Err(AppError::ParseError {
                what: "naming".to_string(),
                details: format!("'{}' (expected se-ste or echo)", other),
            }),
        }
    }
}

/// Parsed protocol table, stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolTable {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl ProtocolTable {
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let cleaned = text.replace('#', "").replace(',', " ");
        let mut lines = cleaned.lines().filter(|l| !l.trim().is_empty());

        let headers: Vec<String> = lines
            .next()
            .ok_or_else(|| parse_error("protocol file is empty"))?
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if headers.len() < MIN_COLUMNS {
            return Err(parse_error(&format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                headers.len()
            )));
        }

        let mut columns = vec![Vec::new(); headers.len()];
        for (line_no, line) in lines.enumerate() {
            let values: Vec<&str> = line.split_whitespace().collect();
            if values.len() != headers.len() {
                return Err(parse_error(&format!(
                    "row {} has {} values, header has {}",
                    line_no + 1,
                    values.len(),
                    headers.len()
                )));
            }
            for (column, value) in columns.iter_mut().zip(values) {
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| parse_error(&format!("non-numeric value '{}'", value)))?;
                column.push(parsed);
            }
        }

        Ok(Self { headers, columns })
    }

    /// Number of acquisitions (table rows).
    pub fn len(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Negate the named gradient column.
    pub fn flip_axis(&mut self, axis: AxisFlip) -> Result<(), AppError> {
        let Some(name) = axis.column_name() else {
            return Ok(());
        };
        let index = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| parse_error(&format!("no column named '{}'", name)))?;
        for value in &mut self.columns[index] {
            *value = -*value;
        }
        Ok(())
    }

    /// Gradient directions: three rows of `%f`-formatted single-precision values.
    pub fn bvecs_text(&self) -> String {
        self.columns[..3]
            .iter()
            .map(|column| format_row(column.iter().map(|v| *v as f32)))
            .collect()
    }

    /// b-values converted to s/mm^2 as a single row.
    pub fn bvals_text(&self, echo: Echo) -> String {
        let column = match echo {
            Echo::SpinEcho => &self.columns[SE_COLUMN],
            Echo::StimulatedEcho => &self.columns[STE_COLUMN],
        };
        format_row(column.iter().map(|v| (v / S_PER_M2_TO_S_PER_MM2) as f32))
    }
}

fn format_row<I: Iterator<Item = f32>>(values: I) -> String {
    let formatted: Vec<String> = values.map(|v| format!("{:.6}", v)).collect();
    format!("{}\n", formatted.join(" "))
}

fn parse_error(details: &str) -> AppError {
    AppError::ParseError { what: "protocol table".to_string(), details: details.to_string() }
}
