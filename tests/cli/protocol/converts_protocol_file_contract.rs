use crate::harness::TestContext;
use predicates::prelude::*;

const PROTOCOL: &str = "#gx,gy,gz,b_se,b_ste\n1,0,0,0,0\n0,0.5,0.5,1000000000,2000000000\n";

#[test]
fn protocol_writes_bvec_and_echo_bvals() {
    let ctx = TestContext::new();
    ctx.write_file("MSMD+AF8-prot.txt", PROTOCOL);

    ctx.cli()
        .args(["protocol", "-i", "MSMD+AF8-prot.txt", "--axis", "gz", "--save-orig"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed file : MSMD_prot.txt"))
        .stdout(predicate::str::contains("Multiplying -1.0 to axis : gz"));

    assert!(!ctx.work_dir().join("MSMD+AF8-prot.txt").exists());
    assert_eq!(
        ctx.read_file("MSMD_prot.bvec"),
        "1.000000 0.000000\n0.000000 0.500000\n-0.000000 -0.500000\n"
    );
    assert_eq!(
        ctx.read_file("MSMD_prot_orig.bvec"),
        "1.000000 0.000000\n0.000000 0.500000\n0.000000 0.500000\n"
    );
    assert_eq!(ctx.read_file("MSMD_prot_SE.bval"), "0.000000 1000.000000\n");
    assert_eq!(ctx.read_file("MSMD_prot_STE.bval"), "0.000000 2000.000000\n");
}

#[test]
fn protocol_echo_naming_uses_echo_suffixes() {
    let ctx = TestContext::new();
    ctx.write_file("prot.txt", PROTOCOL);

    ctx.cli().args(["protocol", "-i", "prot.txt", "--naming", "echo"]).assert().success();

    assert!(ctx.work_dir().join("prot_Echo_0.bval").exists());
    assert!(ctx.work_dir().join("prot_Echo_1.bval").exists());
    assert!(!ctx.work_dir().join("prot_orig.bvec").exists());
}

#[test]
fn protocol_rejects_short_tables() {
    let ctx = TestContext::new();
    ctx.write_file("bad.txt", "gx gy gz\n1 0 0\n");

    ctx.cli()
        .args(["protocol", "-i", "bad.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected at least 5 columns"));
}
