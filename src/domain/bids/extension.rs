/// Extensions recognised as a unit, checked in this order.
pub const MULTIPART_EXTS: [&str; 9] =
    [".nii.gz", ".tar.gz", ".nii", ".bval", ".bvec", ".json", ".tsv", ".mat", ".csv"];

/// Full extension of a file name: a known multi-part extension, else the
/// last `.suffix`, else the empty string.
pub fn full_extension(file_name: &str) -> &str {
    if let Some(ext) = MULTIPART_EXTS.iter().find(|ext| file_name.ends_with(*ext)) {
        return &file_name[file_name.len() - ext.len()..];
    }
    match file_name.rfind('.') {
        // Leading-dot names such as `.bidsignore` have no suffix.
        Some(0) | None => "",
        Some(pos) if pos + 1 == file_name.len() => "",
        Some(pos) => &file_name[pos..],
    }
}
