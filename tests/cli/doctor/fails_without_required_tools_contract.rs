use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn doctor_fails_when_required_tools_are_missing() {
    let ctx = TestContext::new();
    ctx.install_noop_tools(&["fslmaths", "topup"]);

    ctx.cli()
        .arg("doctor")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("fslmaths [FSL]"))
        .stderr(predicate::str::contains("mri_synthstrip [FreeSurfer] not found"))
        .stderr(predicate::str::contains("FSLDIR is not set"))
        .stderr(predicate::str::contains("2 required tool(s) missing"));
}
