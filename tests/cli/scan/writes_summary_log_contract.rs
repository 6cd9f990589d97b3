use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn scan_writes_and_prints_summary() {
    let ctx = TestContext::new();
    ctx.write_file("bids/sub-01/ses-01/anat/sub-01_ses-01_T1w.nii.gz", "");
    ctx.write_file("bids/sub-01/ses-01/anat/sub-01_ses-01_T1w.json", "{}");
    ctx.write_file("bids/sub-02/dwi/sub-02_dwi.bval", "0\n");
    std::fs::create_dir_all(ctx.work_dir().join("bids/sub-03")).unwrap();

    ctx.cli()
        .args(["scan", "bids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- BIDS Summary Log ---"))
        .stdout(predicate::str::contains("Total subjects found: 3"));

    let log = ctx.read_file("bids/bids_summary.log");
    assert!(log.contains("Unique sessions found: 1\n"));
    assert!(log.contains("Session names: ses-01\n"));
    assert!(log.contains("BIDS data types found: anat, dwi\n"));
    assert!(log.contains(
        "  sub-01 | ses-01\n    - anat: 2 files [exts: .json, .nii.gz]\n        * sub-01_ses-01_T1w\n"
    ));
    assert!(log.contains("  sub-02 | (no session)\n    - dwi: 1 files [exts: .bval]\n"));
    assert!(log.contains("  sub-03 | (no session) : No BIDS data type folders present\n"));
}

#[test]
fn scan_rejects_non_directories() {
    let ctx = TestContext::new();
    ctx.write_file("file.txt", "");

    ctx.cli()
        .args(["scan", "file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid directory"));
}
