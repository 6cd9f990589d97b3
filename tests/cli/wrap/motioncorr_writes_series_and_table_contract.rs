use crate::harness::TestContext;
use predicates::prelude::*;

/// `fslsplit IN BASE -t` stand-in producing two volumes.
const FSLSPLIT: &str = ": > \"$2\"0000.nii.gz\n: > \"$2\"0001.nii.gz";
/// `flirt -in V -ref R -out OUT -omat MAT ...` stand-in.
const FLIRT: &str = ": > \"$6\"\n: > \"$8\"";
const FSLMERGE: &str = "echo merged > \"$2\"";
const AVSCALE: &str = "echo 'Rotation Angles (x,y,z) [rads] = 0 0 0'\n\
                       echo 'Translations (x,y,z) [mm] = 0.25 0 0'";

fn install_fsl(ctx: &TestContext) {
    ctx.install_tool("fslsplit", FSLSPLIT);
    ctx.install_tool("flirt", FLIRT);
    ctx.install_tool("fslmerge", FSLMERGE);
    ctx.install_tool("avscale", AVSCALE);
}

#[test]
fn motioncorr_merges_registered_volumes_and_writes_par() {
    let ctx = TestContext::new();
    install_fsl(&ctx);
    ctx.write_file("bold.nii.gz", "");

    ctx.cli()
        .args(["wrap", "motioncorr", "bold.nii.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote bold_mc.nii.gz"))
        .stdout(predicate::str::contains("✅ Wrote bold_mc.par"))
        .stdout(predicate::str::contains("Produced 2 output(s)"));

    assert_eq!(ctx.read_file("bold_mc.nii.gz"), "merged\n");
    assert_eq!(
        ctx.read_file("bold_mc.par"),
        "0.000000  0.000000  0.000000  0.250000  0.000000  0.000000\n\
         0.000000  0.000000  0.000000  0.250000  0.000000  0.000000\n"
    );
    let leftovers = std::fs::read_dir(ctx.work_dir())
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().starts_with(".bto-mc-"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn motioncorr_rejects_reference_beyond_series() {
    let ctx = TestContext::new();
    install_fsl(&ctx);
    ctx.write_file("bold.nii.gz", "");

    ctx.cli()
        .args(["wrap", "mc", "bold.nii.gz", "--reference", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference volume 5 out of range (2 volumes)"));
    assert!(!ctx.work_dir().join("bold_mc.par").exists());
}
