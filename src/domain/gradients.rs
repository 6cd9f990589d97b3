//! Diffusion gradient tables in FSL layout (`.bval` / `.bvec`).

use super::AppError;

/// Decimal places used when writing concatenated bvecs.
pub const BVEC_PRECISION: usize = 8;

/// Parse a `.bval` file body into b-values.
pub fn parse_bvals(file: &str, text: &str) -> Result<Vec<f64>, AppError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| AppError::GradientTable {
                file: file.to_string(),
                reason: format!("non-numeric b-value '{}'", token),
            })
        })
        .collect()
}

/// Join the tokens of several `.bval` bodies into one line.
///
/// Tokens are kept verbatim so integer b-values stay integers.
pub fn concat_bval_text<'a, I>(texts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = texts.into_iter().flat_map(str::split_whitespace).collect();
    format!("{}\n", tokens.join(" "))
}

/// Indices of volumes acquired without diffusion weighting.
pub fn b0_indices(bvals: &[f64]) -> Vec<usize> {
    bvals.iter().enumerate().filter(|(_, b)| **b == 0.0).map(|(i, _)| i).collect()
}

/// Gradient directions as 3 rows (x, y, z) of N components.
#[derive(Debug, Clone, PartialEq)]
pub struct BvecTable {
    rows: [Vec<f64>; 3],
}

impl BvecTable {
    /// Parse a `.bvec` body laid out either 3xN or Nx3.
    pub fn parse(file: &str, text: &str) -> Result<Self, AppError> {
        let malformed =
            |reason: String| AppError::GradientTable { file: file.to_string(), reason };

        let mut matrix: Vec<Vec<f64>> = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row = line
                .split_whitespace()
                .map(|t| t.parse::<f64>().map_err(|_| malformed(format!("non-numeric '{}'", t))))
                .collect::<Result<Vec<_>, _>>()?;
            matrix.push(row);
        }

        let n_rows = matrix.len();
        let n_cols = matrix.first().map(Vec::len).unwrap_or(0);
        if n_rows < 2 {
            return Err(malformed(format!("appears 1D (shape {}x{})", n_rows, n_cols)));
        }
        if matrix.iter().any(|row| row.len() != n_cols) {
            return Err(malformed("rows have differing lengths".to_string()));
        }

        if n_rows == 3 {
            let mut rows = matrix.into_iter();
            let (x, y, z) = (rows.next(), rows.next(), rows.next());
            match (x, y, z) {
                (Some(x), Some(y), Some(z)) => Ok(Self { rows: [x, y, z] }),
                _ => Err(malformed("expected three rows".to_string())),
            }
        } else if n_cols == 3 {
            let column = |c: usize| matrix.iter().map(|row| row[c]).collect::<Vec<_>>();
            Ok(Self { rows: [column(0), column(1), column(2)] })
        } else {
            Err(malformed(format!("unexpected shape {}x{} (expected 3xN or Nx3)", n_rows, n_cols)))
        }
    }

    pub fn from_rows(rows: [Vec<f64>; 3]) -> Self {
        Self { rows }
    }

    /// Number of gradient directions.
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> &[Vec<f64>; 3] {
        &self.rows
    }

    /// Concatenate tables along the direction axis.
    pub fn hstack(tables: &[BvecTable]) -> Self {
        let mut rows: [Vec<f64>; 3] = Default::default();
        for table in tables {
            for (out, row) in rows.iter_mut().zip(table.rows.iter()) {
                out.extend_from_slice(row);
            }
        }
        Self { rows }
    }

    /// Render as three space-separated rows with fixed precision.
    pub fn to_fsl_text(&self, precision: usize) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let values: Vec<String> = row.iter().map(|v| format!("{:.*}", precision, v)).collect();
            out.push_str(&values.join(" "));
            out.push('\n');
        }
        out
    }
}
