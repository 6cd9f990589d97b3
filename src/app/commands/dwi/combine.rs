use std::fs;
use std::path::Path;

use super::{DwiOutcome, copy_if_present};
use crate::app::AppContext;
use crate::app::commands::bids_walk::{dwi_sessions, first_with_suffix};
use crate::domain::AppError;
use crate::domain::bids::{DERIVATIVES_DIR, DwiRunPatterns, sidecar_of};
use crate::domain::gradients::{
    BVEC_PRECISION, BvecTable, b0_indices, concat_bval_text, parse_bvals,
};
use crate::ports::{ToolLocator, ToolRunner, VolumeStore};

/// Step 1: combine AP runs, concatenate gradients, isolate b0 references.
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
    fs::create_dir_all(&derivatives)?;

    for session in dwi_sessions(bids_dir)? {
        let out_dir = derivatives.join(&session.subject).join(&session.session).join("dwi");

        let run1 = first_with_suffix(&session.dwi_dir, DwiRunPatterns::AP_RUN_1)?;
        let run2 = first_with_suffix(&session.dwi_dir, DwiRunPatterns::AP_RUN_2)?;
        if let (Some(run1), Some(run2)) = (run1, run2) {
            fs::create_dir_all(&out_dir)?;
            combine_ap_runs(ctx.volumes(), &run1, &run2, &out_dir)?;
            outcome.combined.push(out_dir.clone());
        } else {
            tracing::debug!(dir = %session.dwi_dir.display(), "no AP run pair");
        }

        if let Some(pa) = first_with_suffix(&session.dwi_dir, DwiRunPatterns::PA_RUN_1)? {
            fs::create_dir_all(&out_dir)?;
            copy_pa_reference(&pa, &out_dir)?;
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
}

fn combine_ap_runs<V: VolumeStore>(
    volumes: &V,
    run1: &Path,
    run2: &Path,
    out_dir: &Path,
) -> Result<(), AppError> {
    let base = DwiRunPatterns::combined_stem(file_name(run1));
    let out_nii = out_dir.join(format!("{}.nii.gz", base));
    let out_json = out_dir.join(format!("{}.json", base));
    let out_bval = out_dir.join(format!("{}.bval", base));
    let out_bvec = out_dir.join(format!("{}.bvec", base));

    let nvols = volumes.concat_volumes(&[run1, run2], &out_nii)?;
    println!("Saved combined NIfTI: {} ({} volumes)", out_nii.display(), nvols);

    copy_if_present(&sidecar_of(run1, ".json"), &out_json)?;

    let (bval1, bval2) = (sidecar_of(run1, ".bval"), sidecar_of(run2, ".bval"));
    if bval1.exists() && bval2.exists() {
        let texts = [fs::read_to_string(&bval1)?, fs::read_to_string(&bval2)?];
        fs::write(&out_bval, concat_bval_text(texts.iter().map(String::as_str)))?;
        println!("Saved concatenated bval: {}", out_bval.display());
    } else {
        eprintln!("⚠️  Missing bval file for {} or {}.", run1.display(), run2.display());
    }

    let (bvec1, bvec2) = (sidecar_of(run1, ".bvec"), sidecar_of(run2, ".bvec"));
    if bvec1.exists() && bvec2.exists() {
        let tables = [read_bvecs(&bvec1)?, read_bvecs(&bvec2)?];
        fs::write(&out_bvec, BvecTable::hstack(&tables).to_fsl_text(BVEC_PRECISION))?;
        println!("Saved concatenated bvec: {}", out_bvec.display());
    } else {
        eprintln!("⚠️  Missing bvec file for {} or {}.", run1.display(), run2.display());
    }

    let b0_stem = DwiRunPatterns::ap_b0_stem(&base);
    extract_b0(
        volumes,
        &out_nii,
        &out_bval,
        &out_json,
        &out_dir.join(format!("{}.nii.gz", b0_stem)),
        &out_dir.join(format!("{}.json", b0_stem)),
    )
}

fn read_bvecs(path: &Path) -> Result<BvecTable, AppError> {
    BvecTable::parse(&path.display().to_string(), &fs::read_to_string(path)?)
}

fn extract_b0<V: VolumeStore>(
    volumes: &V,
    combined_nii: &Path,
    combined_bval: &Path,
    combined_json: &Path,
    b0_nii: &Path,
    b0_json: &Path,
) -> Result<(), AppError> {
    if !combined_bval.exists() {
        eprintln!("⚠️  No combined bval at {}, skipping b0 extraction", combined_bval.display());
        return Ok(());
    }
    let bvals =
        parse_bvals(&combined_bval.display().to_string(), &fs::read_to_string(combined_bval)?)?;
    let indices = b0_indices(&bvals);
    if indices.is_empty() {
        eprintln!("⚠️  No b0 volumes found in {}", combined_bval.display());
        return Ok(());
    }

    volumes.extract_volumes(combined_nii, &indices, b0_nii)?;
    println!("Extracted b0 volumes: {} ({} volumes)", b0_nii.display(), indices.len());
    if copy_if_present(combined_json, b0_json)? {
        println!("Copied JSON for b0: {}", b0_json.display());
    }
    Ok(())
}

fn copy_pa_reference(pa: &Path, out_dir: &Path) -> Result<(), AppError> {
    let b0_name = DwiRunPatterns::pa_b0_name(file_name(pa));
    let out_nii = out_dir.join(&b0_name);
    copy_if_present(pa, &out_nii)?;
    copy_if_present(&sidecar_of(pa, ".json"), &sidecar_of(&out_nii, ".json"))?;
    Ok(())
}
