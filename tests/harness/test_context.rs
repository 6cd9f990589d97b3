//! Shared testing harness for `bto` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake tool directory");
        Self { root, work_dir, bin_dir }
    }

    /// Path to the directory used as the working directory of CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Directory that stands in for `PATH`; see `install_tool`.
    pub(crate) fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Build a command for invoking the compiled `bto` binary with only the
    /// fake tool directory on `PATH` and no toolchain variables.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bto").expect("Failed to locate bto binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", &self.bin_dir)
            .env_remove("FSLDIR")
            .env_remove("FREESURFER_HOME")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `content` to a path relative to the work directory.
    pub(crate) fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, rel: &str) -> String {
        let path = self.work_dir.join(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}
