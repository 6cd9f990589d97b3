use std::fs;
use std::path::Path;

use crate::domain::config::CONFIG_FILE;
use crate::domain::{AppError, BtoConfig};

/// Load configuration from an explicit path, else `bto.toml` in `cwd`,
/// else defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<BtoConfig, AppError> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILE);
            if !candidate.exists() {
                tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, cwd.display());
                return Ok(BtoConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path)?;
    let config: BtoConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
