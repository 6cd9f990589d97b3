//! Dataset summary model and its plain-text report.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::PathBuf;

/// Report file written at the dataset root.
pub const SUMMARY_LOG: &str = "bids_summary.log";

/// Contents of one data type directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTypeListing {
    pub data_type: String,
    pub file_count: usize,
    pub extensions: BTreeSet<String>,
    pub basenames: BTreeSet<String>,
}

impl DataTypeListing {
    pub fn new(data_type: &str) -> Self {
        Self { data_type: data_type.to_string(), ..Default::default() }
    }

    /// Record one file by name and its full extension.
    pub fn add_file(&mut self, file_name: &str, extension: &str) {
        self.file_count += 1;
        self.extensions.insert(extension.to_string());
        if !extension.is_empty() {
            self.basenames.insert(file_name[..file_name.len() - extension.len()].to_string());
        }
    }
}

/// A subject, or a subject/session pair, with its data type listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub subject: String,
    pub session: Option<String>,
    pub listings: Vec<DataTypeListing>,
}

/// Whole-dataset summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub root: PathBuf,
    pub subject_count: usize,
    pub sessions: BTreeSet<String>,
    pub data_types: BTreeSet<String>,
    pub entries: Vec<SessionEntry>,
}

impl DatasetSummary {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            subject_count: 0,
            sessions: BTreeSet::new(),
            data_types: BTreeSet::new(),
            entries: Vec::new(),
        }
    }

    pub fn push_entry(&mut self, entry: SessionEntry) {
        if let Some(session) = &entry.session {
            self.sessions.insert(session.clone());
        }
        for listing in &entry.listings {
            self.data_types.insert(listing.data_type.clone());
        }
        self.entries.push(entry);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let joined = |set: &BTreeSet<String>| {
            if set.is_empty() {
                "None".to_string()
            } else {
                set.iter().cloned().collect::<Vec<_>>().join(", ")
            }
        };

        // Writing into a String cannot fail.
        let _ = writeln!(out, "BIDS Directory: {}", self.root.display());
        let _ = writeln!(out, "Total subjects found: {}", self.subject_count);
        let _ = writeln!(out, "Unique sessions found: {}", self.sessions.len());
        let _ = writeln!(out, "Session names: {}", joined(&self.sessions));
        let _ = writeln!(out, "BIDS data types found: {}", joined(&self.data_types));
        let _ = writeln!(out, "\nDetailed listing per subject/session:");

        for entry in &self.entries {
            let session = entry.session.as_deref().unwrap_or("(no session)");
            let _ = write!(out, "  {} | {}", entry.subject, session);
            if entry.listings.is_empty() {
                let _ = writeln!(out, " : No BIDS data type folders present");
            } else {
                out.push('\n');
                for listing in &entry.listings {
                    let exts = listing.extensions.iter().cloned().collect::<Vec<_>>().join(", ");
                    let _ = writeln!(
                        out,
                        "    - {}: {} files [exts: {}]",
                        listing.data_type, listing.file_count, exts
                    );
                    for basename in &listing.basenames {
                        let _ = writeln!(out, "        * {}", basename);
                    }
                }
            }
            out.push('\n');
        }
        out
    }
}
