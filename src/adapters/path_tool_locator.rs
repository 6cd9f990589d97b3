use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::domain::tool::TOOLCHAIN_ENV_VARS;
use crate::ports::ToolLocator;

/// Finds tools on a search path, `PATH` by default.
#[derive(Debug, Clone, Default)]
pub struct PathToolLocator {
    search_path: Vec<PathBuf>,
    env: BTreeMap<String, String>,
}

impl PathToolLocator {
    pub fn new(search_path: Vec<PathBuf>, env: BTreeMap<String, String>) -> Self {
        Self { search_path, env }
    }

    /// Snapshot `PATH` and the toolchain variables of the current process.
    pub fn from_env() -> Self {
        let search_path =
            env::var_os("PATH").map(|p| env::split_paths(&p).collect()).unwrap_or_default();
        let env = TOOLCHAIN_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        Self { search_path, env }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

impl ToolLocator for PathToolLocator {
    fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_path.iter().map(|dir| dir.join(name)).find(|candidate| is_executable(candidate))
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).filter(|v| !v.is_empty()).cloned()
    }
}
