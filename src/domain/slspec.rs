//! Slice acquisition order for EDDY slice-to-volume correction.

use super::AppError;

/// Slices excited together, one row per excitation in acquisition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceSpec {
    groups: Vec<Vec<usize>>,
}

impl SliceSpec {
    /// Derive the excitation groups from BIDS `SliceTiming`.
    pub fn from_slice_timing(times: &[f64]) -> Result<Self, AppError> {
        if times.is_empty() {
            return Err(AppError::SliceTiming("SliceTiming is empty".to_string()));
        }
        if times.iter().any(|t| !t.is_finite()) {
            return Err(AppError::SliceTiming("SliceTiming contains non-finite values".into()));
        }

        let mut order: Vec<usize> = (0..times.len()).collect();
        order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));

        let mut groups: Vec<Vec<usize>> = Vec::new();
        let mut last: Option<f64> = None;
        for index in order {
            let t = times[index];
            match (last, groups.last_mut()) {
                (Some(prev), Some(group)) if prev == t => group.push(index),
                _ => groups.push(vec![index]),
            }
            last = Some(t);
        }

        let multiband = times.len() / groups.len();
        if times.len() % groups.len() != 0 || groups.iter().any(|g| g.len() != multiband) {
            return Err(AppError::SliceTiming(format!(
                "{} slices do not split evenly into {} excitations",
                times.len(),
                groups.len()
            )));
        }

        Ok(Self { groups })
    }

    pub fn multiband_factor(&self) -> usize {
        self.groups.first().map(Vec::len).unwrap_or(0)
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Render with each index right-aligned in three columns.
    pub fn to_fsl_text(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let cells: Vec<String> = group.iter().map(|i| format!("{:>3}", i)).collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out
    }
}
