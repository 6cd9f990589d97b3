//! BIDS dataset summary report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::commands::bids_walk::{dirs_with_prefix, files_in};
use crate::domain::AppError;
use crate::domain::bids::{
    BIDS_DATA_TYPES, DataTypeListing, DatasetSummary, SESSION_PREFIX, SUBJECT_PREFIX,
    SUMMARY_LOG, SessionEntry, full_extension,
};

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub summary: DatasetSummary,
    pub log_path: PathBuf,
}

pub fn execute(bids_dir: &Path) -> Result<ScanOutcome, AppError> {
    if !bids_dir.is_dir() {
        return Err(AppError::NotADirectory(bids_dir.display().to_string()));
    }
    let root = fs::canonicalize(bids_dir)?;
    let summary = summarize(&root)?;

    let log_path = root.join(SUMMARY_LOG);
    fs::write(&log_path, summary.render())?;
    Ok(ScanOutcome { summary, log_path })
}

/// Walk `sub-*` (and `ses-*` when present) directories under `root`.
pub fn summarize(root: &Path) -> Result<DatasetSummary, AppError> {
    let mut summary = DatasetSummary::new(root.to_path_buf());
    let subjects = dirs_with_prefix(root, SUBJECT_PREFIX)?;
    summary.subject_count = subjects.len();

    for (subject, subject_dir) in subjects {
        let sessions = dirs_with_prefix(&subject_dir, SESSION_PREFIX)?;
        if sessions.is_empty() {
            let listings = list_data_types(&subject_dir)?;
            summary.push_entry(SessionEntry { subject, session: None, listings });
            continue;
        }
        for (session, session_dir) in sessions {
            let listings = list_data_types(&session_dir)?;
            summary.push_entry(SessionEntry {
                subject: subject.clone(),
                session: Some(session),
                listings,
            });
        }
    }
    tracing::debug!(subjects = summary.subject_count, "scanned dataset");
    Ok(summary)
}

fn list_data_types(dir: &Path) -> Result<Vec<DataTypeListing>, AppError> {
    let mut listings = Vec::new();
    for data_type in BIDS_DATA_TYPES {
        let type_dir = dir.join(data_type);
        if !type_dir.is_dir() {
            continue;
        }
        let mut listing = DataTypeListing::new(data_type);
        for name in files_in(&type_dir)? {
            listing.add_file(&name, full_extension(&name));
        }
        listings.push(listing);
    }
    Ok(listings)
}
