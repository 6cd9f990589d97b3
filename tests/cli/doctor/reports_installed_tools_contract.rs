use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn doctor_passes_with_required_tools_installed() {
    let ctx = TestContext::new();
    ctx.install_noop_tools(&["fslmaths", "topup", "eddy_cuda", "mri_synthstrip"]);

    ctx.cli()
        .arg("doctor")
        .env("FSLDIR", "/opt/fsl")
        .assert()
        .success()
        .stdout(predicate::str::contains("eddy_cuda [FSL] ->"))
        .stdout(predicate::str::contains("FSLDIR=/opt/fsl"))
        .stdout(predicate::str::contains("All required tools found."))
        .stderr(predicate::str::contains("3dSkullStrip [AFNI] not found (optional)"));
}

#[test]
fn doctor_checks_the_configured_eddy_build() {
    let ctx = TestContext::new();
    ctx.install_noop_tools(&["fslmaths", "topup", "eddy_cpu", "mri_synthstrip"]);
    ctx.write_file("bto.toml", "[eddy]\nbinary = \"eddy_cpu\"\n");

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("eddy_cpu [FSL] ->"))
        .stdout(predicate::str::contains("eddy_cuda").not());
}
