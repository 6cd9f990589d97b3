//! External tool invocations and toolchain requirements.

use std::fmt;
use std::path::{Path, PathBuf};

/// How an external command is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// Program with an argument vector, no shell involved.
    Argv { program: String, args: Vec<String> },
    /// A line interpreted by `sh -c`, so `${FSLDIR}`-style references expand.
    Shell(String),
}

/// One external command to run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub command: CommandLine,
    pub cwd: Option<PathBuf>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: CommandLine::Argv {
                program: program.to_string(),
                args: args.into_iter().map(Into::into).collect(),
            },
            cwd: None,
        }
    }

    pub fn shell<S: Into<String>>(line: S) -> Self {
        Self { command: CommandLine::Shell(line.into()), cwd: None }
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Program name for argv commands; `sh` for shell lines.
    pub fn program(&self) -> &str {
        match &self.command {
            CommandLine::Argv { program, .. } => program,
            CommandLine::Shell(_) => "sh",
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.command {
            CommandLine::Argv { program, args } => {
                f.write_str(program)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                Ok(())
            }
            CommandLine::Shell(line) => f.write_str(line),
        }
    }
}

/// Exit status of a finished tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failed(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Status and captured standard output of a finished tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub status: ToolStatus,
    pub stdout: String,
}

/// A tool that must be on `PATH`; any one of `names` satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRequirement {
    pub names: Vec<String>,
    pub package: &'static str,
}

impl ToolRequirement {
    pub fn new(name: &str, package: &'static str) -> Self {
        Self::any_of(&[name], package)
    }

    pub fn any_of(names: &[&str], package: &'static str) -> Self {
        Self { names: names.iter().map(|n| n.to_string()).collect(), package }
    }

    pub fn label(&self) -> String {
        format!("{} [{}]", self.names.join(" or "), self.package)
    }
}

/// Tools run by the DWI pipeline when executing, with `eddy_binary` as the
/// configured EDDY build.
pub fn dwi_execute_tools(eddy_binary: &str) -> Vec<ToolRequirement> {
    vec![
        ToolRequirement::new("fslmaths", "FSL"),
        ToolRequirement::new("topup", "FSL"),
        ToolRequirement::new(eddy_binary, "FSL"),
        ToolRequirement::new("mri_synthstrip", "FreeSurfer"),
    ]
}

/// Tools used by the single-tool wrappers.
pub fn wrapper_tools() -> Vec<ToolRequirement> {
    vec![
        ToolRequirement::new("3dAFNItoNIFTI", "AFNI"),
        ToolRequirement::new("3dSkullStrip", "AFNI"),
        ToolRequirement::new("3dAutobox", "AFNI"),
        ToolRequirement::new("bet", "FSL"),
        ToolRequirement::new("robustfov", "FSL"),
        ToolRequirement::new("fast", "FSL"),
        ToolRequirement::new("fslsplit", "FSL"),
        ToolRequirement::new("flirt", "FSL"),
        ToolRequirement::new("fslmerge", "FSL"),
        ToolRequirement::new("avscale", "FSL"),
        ToolRequirement::new("convert", "ImageMagick"),
    ]
}

/// Environment variables referenced by synthesized command lines.
pub const TOOLCHAIN_ENV_VARS: [&str; 2] = ["FSLDIR", "FREESURFER_HOME"];
