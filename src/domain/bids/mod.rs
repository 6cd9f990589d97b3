//! BIDS dataset conventions.

mod extension;
mod layout;
mod summary;

pub use extension::{MULTIPART_EXTS, full_extension};
pub use layout::{DERIVATIVES_DIR, DwiRunPatterns, SessionFiles, SessionPrefix, sidecar_of};
pub use summary::{DataTypeListing, DatasetSummary, SUMMARY_LOG, SessionEntry};

/// BIDS data type directories, in reporting order.
pub const BIDS_DATA_TYPES: [&str; 14] = [
    "anat", "dwi", "func", "fmap", "perf", "meg", "eeg", "ieeg", "beh", "pet", "micr", "nirs",
    "motion", "mrs",
];

/// Directory name prefix for subjects.
pub const SUBJECT_PREFIX: &str = "sub-";

/// Directory name prefix for sessions.
pub const SESSION_PREFIX: &str = "ses-";
