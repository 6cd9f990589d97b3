use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn skullstrip_requires_existing_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["wrap", "skullstrip", "t1.nii.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input not found: t1.nii.gz"));
}

#[test]
fn fov_requires_nifti_extension() {
    let ctx = TestContext::new();
    ctx.write_file("t1.mgz", "");

    ctx.cli()
        .args(["wrap", "fov", "t1.mgz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image name 't1.mgz'"));
}

#[test]
fn skullstrip_reports_missing_tool() {
    let ctx = TestContext::new();
    ctx.write_file("t1.nii.gz", "");

    ctx.cli()
        .args(["wrap", "skullstrip", "t1.nii.gz", "--method", "bet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch 'bet"));
}

#[test]
fn biascorr_fails_when_fast_produces_nothing() {
    let ctx = TestContext::new();
    ctx.install_tool("fast", "exit 0");
    ctx.write_file("t1.nii.gz", "");

    ctx.cli()
        .args(["wrap", "biascorr", "t1.nii.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected output was not produced"));

    let leftovers = std::fs::read_dir(ctx.work_dir())
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().starts_with(".bto-biascorr-"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn biascorr_reports_only_the_final_output() {
    let ctx = TestContext::new();
    // `fast ... -B -o BASE INPUT`: BASE is the 13th argument.
    ctx.install_tool("fast", ": > \"${13}_restore.nii.gz\"");
    ctx.write_file("t1.nii.gz", "");

    ctx.cli()
        .args(["wrap", "biascorr", "t1.nii.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote t1_biascorr.nii.gz"))
        .stdout(predicate::str::contains("✅ Wrote").count(1))
        .stdout(predicate::str::contains("_restore").not());
    assert!(ctx.work_dir().join("t1_biascorr.nii.gz").exists());
}
