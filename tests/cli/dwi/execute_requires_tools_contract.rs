use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dwi_execute_refuses_to_start_without_tools() {
    let ctx = TestContext::new();
    ctx.write_raw_dwi_session();

    ctx.cli()
        .args(["dwi", "--mode", "all", "bids", "--execute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required MRI tools are missing from PATH"))
        .stderr(predicate::str::contains("topup [FSL]"));

    assert!(!ctx.derivatives_session().exists(), "nothing should run before the tool check");
}

#[test]
fn dwi_step_one_with_execute_does_not_need_tools() {
    let ctx = TestContext::new();
    ctx.write_raw_dwi_session();

    ctx.cli().args(["dwi", "-m", "step-1", "bids", "--execute"]).assert().success();
}
