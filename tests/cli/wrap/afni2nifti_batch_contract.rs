use crate::harness::TestContext;
use predicates::prelude::*;

/// `3dAFNItoNIFTI -prefix OUT IN` stand-in that creates OUT.
const CONVERTER: &str = ": > \"$2\"";

#[test]
fn afni2nifti_converts_batch_and_reports_failures() {
    let ctx = TestContext::new();
    ctx.install_tool("3dAFNItoNIFTI", CONVERTER);
    ctx.write_file("anat+orig.HEAD", "");
    ctx.write_file("epi+tlrc.HEAD", "");

    ctx.cli()
        .args(["wrap", "afni2nifti", "anat+orig.HEAD", "missing+orig.HEAD", "epi+tlrc.HEAD"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input not found: missing+orig.HEAD"))
        .stderr(predicate::str::contains("1 of 3 conversion(s) failed."));

    assert!(ctx.work_dir().join("anat.nii.gz").exists());
    assert!(ctx.work_dir().join("epi.nii.gz").exists());
}

#[test]
fn afni2nifti_succeeds_when_every_input_converts() {
    let ctx = TestContext::new();
    ctx.install_tool("3dAFNItoNIFTI", CONVERTER);
    ctx.write_file("anat+orig.HEAD", "");

    ctx.cli()
        .args(["wrap", "a2n", "anat+orig.HEAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Produced 1 output(s)"));
}
