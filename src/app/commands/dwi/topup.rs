use std::fs;
use std::path::Path;

use super::{DwiOutcome, display, read_sidecar};
use crate::app::AppContext;
use crate::app::commands::bids_walk::dwi_sessions;
use crate::domain::AppError;
use crate::domain::acquisition::{ReadoutTime, topup_params};
use crate::domain::bids::{DERIVATIVES_DIR, SessionFiles, SessionPrefix};
use crate::ports::{ToolLocator, ToolRunner, VolumeStore};
use crate::services::{TopupCommand, topup_config};

const FALLBACK_THREADS: usize = 8;

/// Step 2: merge b0 references, write acquisition parameters, config and
/// the TOPUP command line.
pub(super) fn run<R, V, L>(
    ctx: &AppContext<R, V, L>,
    bids_dir: &Path,
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

    let settings = &ctx.config().dwi;
    let nthr = settings.threads.unwrap_or_else(|| {
        std::thread::available_parallelism().map(|n| n.get()).unwrap_or(FALLBACK_THREADS)
    });

    for session in dwi_sessions(&derivatives)? {
        let prefix = SessionPrefix::new(&session.subject, &session.session, &settings.acq_label);
        let files = SessionFiles::new(session.dwi_dir.clone(), prefix);

        let config_path = files.dir().join(&settings.topup_config_name);
        fs::write(&config_path, topup_config()?)?;

        let (ap_b0, pa_b0) = (files.ap_b0(), files.pa_b0());
        if !ap_b0.exists() || !pa_b0.exists() {
            eprintln!("⚠️  Missing b0 images in {}, skipping", files.dir().display());
            tracing::warn!(dir = %files.dir().display(), "skipping session without b0 pair");
            continue;
        }

        let merged = files.topup_input();
        if merged.exists() {
            println!("TOPUP input already exists: {}", merged.display());
        } else {
            ctx.volumes().concat_volumes(&[&ap_b0, &pa_b0], &merged)?;
            println!("Merged b0 images: {}", merged.display());
        }

        let json_path = files.combined_json();
        if !json_path.exists() {
            eprintln!("⚠️  JSON not found: {}, skipping", json_path.display());
            continue;
        }
        let Some(trt) = ReadoutTime::from_sidecar(&read_sidecar(&json_path)?)? else {
            eprintln!("⚠️  TotalReadoutTime missing in {}, skipping", json_path.display());
            continue;
        };

        let n_ap = ctx.volumes().volume_count(&ap_b0)?;
        let n_total = ctx.volumes().volume_count(&merged)?;
        let n_pa = n_total.saturating_sub(n_ap);
        fs::write(files.topup_params(), topup_params(n_ap, n_pa, &trt))?;
        println!(
            "TOPUP params written: {} (AP: {}, PA: {})",
            files.topup_params().display(),
            n_ap,
            n_pa
        );

        let command = TopupCommand {
            imain: display(&merged),
            datain: display(&files.topup_params()),
            config: display(&config_path),
            out: display(&files.topup_output()),
            fout: display(&files.fmap_hz()),
            iout: display(&files.fmap_mag()),
            nthr,
        }
        .render()?;
        let cmd_path = files.topup_cmd();
        fs::write(&cmd_path, format!("{}\n", command))?;
        println!("TOPUP command written: {}\n{}\n", cmd_path.display(), command);
        outcome.topup_commands.push(cmd_path);
    }
    Ok(())
}
