//! Fake external tools installed into the harness `PATH`.

use std::fs;
use std::path::Path;

use super::TestContext;

impl TestContext {
    /// Install an executable shell script named `name`.
    ///
    /// Scripts run with only the fake tool directory on `PATH`, so bodies
    /// should stick to shell builtins.
    pub(crate) fn install_tool(&self, name: &str, body: &str) {
        let path = self.bin_dir().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write fake tool");
        make_executable(&path);
    }

    /// Install tools that exit successfully without doing anything.
    pub(crate) fn install_noop_tools(&self, names: &[&str]) {
        for name in names {
            self.install_tool(name, "exit 0");
        }
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake tool executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
