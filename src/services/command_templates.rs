//! Embedded TOPUP configuration and command-line templates.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

const TOPUP_CONFIG: &str = "topup/bto_dwi.cnf";
const TEMPLATES: [(&str, &str); 4] = [
    ("topup", "templates/topup.cmd.j2"),
    ("eddy", "templates/eddy.cmd.j2"),
    ("fslmaths_tmean", "templates/fslmaths_tmean.cmd.j2"),
    ("synthstrip", "templates/synthstrip.cmd.j2"),
];

/// Arguments of the synthesized `topup` call.
#[derive(Debug, Clone, Serialize)]
pub struct TopupCommand {
    pub imain: String,
    pub datain: String,
    pub config: String,
    pub out: String,
    pub fout: String,
    pub iout: String,
    pub nthr: usize,
}

/// Arguments of the synthesized `eddy` call.
#[derive(Debug, Clone, Serialize)]
pub struct EddyCommand {
    pub binary: String,
    pub imain: String,
    pub mask: String,
    pub index: String,
    pub acqp: String,
    pub bvecs: String,
    pub bvals: String,
    pub slspec: String,
    pub topup: String,
    pub mporder: u32,
    pub s2v_niter: u32,
    pub niter: u32,
    pub ol_nstd: u32,
    pub out: String,
}

/// In-place temporal mean of the TOPUP magnitude, clamped at zero.
#[derive(Debug, Clone, Serialize)]
pub struct TmeanCommand {
    pub image: String,
}

/// Brain extraction of the TOPUP magnitude.
#[derive(Debug, Clone, Serialize)]
pub struct SynthstripCommand {
    pub image: String,
    pub mask: String,
    pub brain: String,
}

/// Body of the TOPUP `--config` file.
pub fn topup_config() -> Result<&'static str, AppError> {
    ASSETS_DIR
        .get_file(TOPUP_CONFIG)
        .and_then(|f| f.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("missing embedded asset {}", TOPUP_CONFIG)))
}

fn environment() -> Result<&'static Environment<'static>, AppError> {
    static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, path) in TEMPLATES {
            let source = ASSETS_DIR
                .get_file(path)
                .and_then(|f| f.contents_utf8())
                .ok_or_else(|| format!("missing embedded asset {}", path))?;
            env.add_template(name, source).map_err(|e| e.to_string())?;
        }
        Ok(env)
    })
    .as_ref()
    .map_err(|e| AppError::Template(e.clone()))
}

fn render<S: Serialize>(name: &str, args: &S) -> Result<String, AppError> {
    let env = environment()?;
    let template = env.get_template(name).map_err(|e| AppError::Template(e.to_string()))?;
    let rendered = template.render(args).map_err(|e| AppError::Template(e.to_string()))?;
    Ok(rendered.trim_end().to_string())
}

impl TopupCommand {
    pub fn render(&self) -> Result<String, AppError> {
        render("topup", self)
    }
}

impl EddyCommand {
    pub fn render(&self) -> Result<String, AppError> {
        render("eddy", self)
    }
}

impl TmeanCommand {
    pub fn render(&self) -> Result<String, AppError> {
        render("fslmaths_tmean", self)
    }
}

impl SynthstripCommand {
    pub fn render(&self) -> Result<String, AppError> {
        render("synthstrip", self)
    }
}
