use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dwi_rejects_missing_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["dwi", "--mode", "step-1", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'nowhere' is not a valid directory"));
}

#[test]
fn dwi_rejects_unknown_mode() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["dwi", "--mode", "step-4", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected step-1, step-2, step-3 or all"));
}

#[test]
fn dwi_rejects_missing_explicit_config() {
    let ctx = TestContext::new();
    ctx.write_raw_dwi_session();

    ctx.cli()
        .args(["--config", "absent.toml", "dwi", "--mode", "step-1", "bids"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: absent.toml"));
}
