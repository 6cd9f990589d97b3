use crate::harness::TestContext;
use crate::harness::bids_dataset::STEM;
use predicates::prelude::*;

#[test]
fn dwi_steps_write_every_pipeline_input() {
    let ctx = TestContext::new();
    ctx.write_raw_dwi_session();
    let session = ctx.derivatives_session();
    let file = |tail: &str| session.join(format!("{}_{}", STEM, tail));

    ctx.cli()
        .args(["dwi", "--mode", "step-1", "bids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[STEP 1]"))
        .stdout(predicate::str::contains("Combined AP runs in 1 session(s)"));
    assert!(file("dir-AP_part-mag_dwi_combined.nii.gz").exists());
    assert!(file("dir-AP_b0.nii.gz").exists());
    assert!(file("dir-PA_b0.nii.gz").exists());

    ctx.cli()
        .args(["dwi", "--mode", "step-2", "bids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("${FSLDIR}/bin/topup --imain="));
    assert_eq!(
        std::fs::read_to_string(file("b0_TOPUP_input.params")).unwrap(),
        "0 -1 0 0.0512\n0 -1 0 0.0512\n0 1 0 0.0512\n"
    );
    assert!(session.join("bto_dwi_sk25.cnf").exists());

    ctx.cli()
        .args(["dwi", "--mode", "step-3", "bids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --execute"));
    assert_eq!(
        std::fs::read_to_string(file("dwi_combined_eddy.indices")).unwrap(),
        "1 1 1 1 1\n"
    );
    assert_eq!(
        std::fs::read_to_string(file("dwi_combined_eddy.slspec")).unwrap(),
        "  0   2\n  1   3\n"
    );
    let eddy = std::fs::read_to_string(file("dwi_combined_eddy.cmd")).unwrap();
    assert!(eddy.starts_with("${FSLDIR}/bin/eddy_cuda --imain="));
}

#[test]
fn dwi_reads_acquisition_label_from_config() {
    let ctx = TestContext::new();
    ctx.write_raw_dwi_session();
    ctx.write_file("custom.toml", "[dwi]\nacq_label = \"OTHER\"\nthreads = 2\n");

    ctx.cli().args(["dwi", "-m", "step-1", "bids"]).assert().success();
    ctx.cli()
        .args(["--config", "custom.toml", "dwi", "-m", "step-2", "bids"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Missing b0 images"));
}
