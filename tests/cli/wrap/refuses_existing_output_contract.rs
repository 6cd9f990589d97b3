use crate::harness::TestContext;
use predicates::prelude::*;

/// `3dAutobox -input IN -prefix OUT -npad N` stand-in that writes OUT.
const AUTOBOX: &str = "echo boxed > \"$4\"";

#[test]
fn autobox_keeps_existing_output_without_force() {
    let ctx = TestContext::new();
    ctx.install_tool("3dAutobox", AUTOBOX);
    ctx.write_file("epi.nii.gz", "");
    ctx.write_file("epi_abox.nii.gz", "previous");

    ctx.cli()
        .args(["wrap", "autobox", "epi.nii.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(ctx.read_file("epi_abox.nii.gz"), "previous");

    ctx.cli().args(["wrap", "autobox", "epi.nii.gz", "--npad", "2", "--force"]).assert().success();
    assert_eq!(ctx.read_file("epi_abox.nii.gz"), "boxed\n");
}
