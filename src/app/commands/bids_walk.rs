//! Directory walking shared by the BIDS commands.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::bids::{SESSION_PREFIX, SUBJECT_PREFIX};

/// Subdirectories of `dir` whose names start with `prefix`, sorted by name.
pub fn dirs_with_prefix(dir: &Path, prefix: &str) -> Result<Vec<(String, PathBuf)>, AppError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name.starts_with(prefix) && path.is_dir() {
            found.push((name, path));
        }
    }
    found.sort();
    Ok(found)
}

/// Regular files directly inside `dir`, sorted by name.
pub fn files_in(dir: &Path) -> Result<Vec<String>, AppError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file()
            && let Some(name) = entry.file_name().to_str()
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// First file in `dir` (by name) ending with `suffix`.
pub fn first_with_suffix(dir: &Path, suffix: &str) -> Result<Option<PathBuf>, AppError> {
    Ok(files_in(dir)?.into_iter().find(|name| name.ends_with(suffix)).map(|name| dir.join(name)))
}

/// A `<root>/sub-*/ses-*/dwi` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DwiSessionDir {
    pub subject: String,
    pub session: String,
    pub dwi_dir: PathBuf,
}

/// Every `sub-*/ses-*/dwi` directory under `root`, in subject/session order.
pub fn dwi_sessions(root: &Path) -> Result<Vec<DwiSessionDir>, AppError> {
    let mut sessions = Vec::new();
    for (subject, subject_dir) in dirs_with_prefix(root, SUBJECT_PREFIX)? {
        for (session, session_dir) in dirs_with_prefix(&subject_dir, SESSION_PREFIX)? {
            let dwi_dir = session_dir.join("dwi");
            if dwi_dir.is_dir() {
                sessions.push(DwiSessionDir { subject: subject.clone(), session, dwi_dir });
            }
        }
    }
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_dwi_sessions_in_order() {
        let root = TempDir::new().unwrap();
        for dir in ["sub-02/ses-01/dwi", "sub-01/ses-02/dwi", "sub-01/ses-01/dwi", "sub-01/ses-03/anat"]
        {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("sub-03"), "not a directory").unwrap();

        let sessions = dwi_sessions(root.path()).unwrap();
        let labels: Vec<(String, String)> =
            sessions.iter().map(|s| (s.subject.clone(), s.session.clone())).collect();
        assert_eq!(
            labels,
            vec![
                ("sub-01".to_string(), "ses-01".to_string()),
                ("sub-01".to_string(), "ses-02".to_string()),
                ("sub-02".to_string(), "ses-01".to_string()),
            ]
        );
    }

    #[test]
    fn first_with_suffix_is_deterministic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b_dir-AP_run-1_dwi.nii.gz"), "").unwrap();
        fs::write(dir.path().join("a_dir-AP_run-1_dwi.nii.gz"), "").unwrap();
        fs::create_dir(dir.path().join("c_dir-AP_run-1_dwi.nii.gz")).unwrap();

        let found = first_with_suffix(dir.path(), "_dir-AP_run-1_dwi.nii.gz").unwrap();
        assert_eq!(found, Some(dir.path().join("a_dir-AP_run-1_dwi.nii.gz")));
        assert_eq!(first_with_suffix(dir.path(), "_dir-PA_run-1_dwi.nii.gz").unwrap(), None);
    }
}
