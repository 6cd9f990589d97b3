use crate::harness::TestContext;
use predicates::prelude::*;

/// `convert ... OUTPUT` stand-in that writes its last argument.
const CONVERT: &str = "for last; do :; done\necho captioned > \"$last\"";

#[test]
fn caption_writes_labelled_copy_next_to_input() {
    let ctx = TestContext::new();
    ctx.install_tool("convert", CONVERT);
    ctx.write_file("fig.png", "");

    ctx.cli()
        .args(["wrap", "caption", "fig.png", "--text", "Axial T1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("label:Axial T1"))
        .stdout(predicate::str::contains("✅ Wrote fig_caption.png"));
    assert_eq!(ctx.read_file("fig_caption.png"), "captioned\n");
}

#[test]
fn caption_reports_missing_imagemagick() {
    let ctx = TestContext::new();
    ctx.write_file("fig.png", "");

    ctx.cli()
        .args(["wrap", "cap", "fig.png", "-t", "Axial T1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch 'convert"));
}
