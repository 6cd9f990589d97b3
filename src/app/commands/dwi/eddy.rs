use std::fs;
use std::path::Path;

use super::{DwiOutcome, display, read_sidecar, run_tool};
use crate::app::AppContext;
use crate::app::commands::bids_walk::dwi_sessions;
use crate::domain::acquisition::{eddy_indices, slice_timing};
use crate::domain::bids::{DERIVATIVES_DIR, SessionFiles, SessionPrefix};
use crate::domain::slspec::SliceSpec;
use crate::domain::{AppError, ToolInvocation};
use crate::ports::{ToolLocator, ToolRunner, VolumeStore};
use crate::services::{EddyCommand, SynthstripCommand, TmeanCommand};

/// Step 3: run TOPUP, write EDDY inputs and its command line, and run EDDY
/// when executing.
pub(super) fn run<R, V, L>(
    ctx: &AppContext<R, V, L>,
    bids_dir: &Path,
    execute: bool,
    outcome: &mut DwiOutcome,
) -> Result<(), AppError>
where
    R: ToolRunner,
    V: VolumeStore,
    L: ToolLocator,
{
    let derivatives = bids_dir.join(DERIVATIVES_DIR);
    if !derivatives.is_dir() {
        eprintln!("⚠️  No derivatives directory at {}", derivatives.display());
        return Ok(());
    }

    for session in dwi_sessions(&derivatives)? {
        let prefix =
            SessionPrefix::new(&session.subject, &session.session, &ctx.config().dwi.acq_label);
        let files = SessionFiles::new(session.dwi_dir.clone(), prefix);

        let topup_cmd = files.topup_cmd();
        if !topup_cmd.exists() {
            eprintln!("⚠️  TOPUP command file not found: {}, skipping", topup_cmd.display());
            tracing::warn!(dir = %files.dir().display(), "skipping session without TOPUP command");
            continue;
        }
        let topup_line = fs::read_to_string(&topup_cmd)?.trim().to_string();
        println!("TOPUP command:\n{}\n", topup_line);
        if execute {
            run_tool(ctx.runner(), &ToolInvocation::shell(topup_line).in_dir(files.dir()), outcome);
        }

        write_indices(ctx.volumes(), &files)?;
        if let Err(err) = write_slspec(&files) {
            eprintln!("⚠️  No slspec written for {}: {}", files.dir().display(), err);
            tracing::warn!(dir = %files.dir().display(), error = %err, "skipping slspec");
        }

        if execute && files.fmap_mag().exists() {
            prepare_magnitude(ctx.runner(), &files, outcome)?;
        }

        let eddy = &ctx.config().eddy;
        let command = EddyCommand {
            binary: eddy.binary.clone(),
            imain: display(&files.combined_nii()),
            mask: display(&files.fmap_mag_brainmask()),
            index: display(&files.eddy_indices()),
            acqp: display(&files.topup_params()),
            bvecs: display(&files.combined_bvec()),
            bvals: display(&files.combined_bval()),
            slspec: display(&files.eddy_slspec()),
            topup: display(&files.topup_output()),
            mporder: eddy.mporder,
            s2v_niter: eddy.s2v_niter,
            niter: eddy.niter,
            ol_nstd: eddy.ol_nstd,
            out: display(&files.eddy_output()),
        }
        .render()?;
        let cmd_path = files.eddy_cmd();
        fs::write(&cmd_path, format!("{}\n", command))?;
        println!("EDDY command written: {}\n{}\n", cmd_path.display(), command);
        outcome.eddy_commands.push(cmd_path);

        if execute {
            run_tool(ctx.runner(), &ToolInvocation::shell(command).in_dir(files.dir()), outcome);
        }
    }
    Ok(())
}

fn write_indices<V: VolumeStore>(volumes: &V, files: &SessionFiles) -> Result<(), AppError> {
    let combined = files.combined_nii();
    if !combined.exists() {
        eprintln!("⚠️  DWI file not found for index: {}", combined.display());
        return Ok(());
    }
    let nvols = volumes.volume_count(&combined)?;
    fs::write(files.eddy_indices(), eddy_indices(nvols))?;
    println!("Index file written: {} ({} volumes)", files.eddy_indices().display(), nvols);
    Ok(())
}

fn write_slspec(files: &SessionFiles) -> Result<(), AppError> {
    let json_path = files.combined_json();
    if !json_path.exists() {
        eprintln!("⚠️  JSON not found for slspec: {}", json_path.display());
        return Ok(());
    }
    let Some(times) = slice_timing(&read_sidecar(&json_path)?)? else {
        eprintln!("⚠️  SliceTiming missing in {}, no slspec written", json_path.display());
        return Ok(());
    };
    let spec = SliceSpec::from_slice_timing(&times)?;
    fs::write(files.eddy_slspec(), spec.to_fsl_text())?;
    println!(
        "Slspec file written: {} (MB factor {}, {} excitations)",
        files.eddy_slspec().display(),
        spec.multiband_factor(),
        spec.groups().len()
    );
    Ok(())
}

/// Average the TOPUP magnitude over time and brain-extract it for the EDDY mask.
fn prepare_magnitude<R: ToolRunner>(
    runner: &R,
    files: &SessionFiles,
    outcome: &mut DwiOutcome,
) -> Result<(), AppError> {
    let mag = display(&files.fmap_mag());
    let tmean = TmeanCommand { image: mag.clone() }.render()?;
    run_tool(runner, &ToolInvocation::shell(tmean).in_dir(files.dir()), outcome);

    let strip = SynthstripCommand {
        image: mag,
        mask: display(&files.fmap_mag_brainmask()),
        brain: display(&files.fmap_mag_brain()),
    }
    .render()?;
    run_tool(runner, &ToolInvocation::shell(strip).in_dir(files.dir()), outcome);
    Ok(())
}
