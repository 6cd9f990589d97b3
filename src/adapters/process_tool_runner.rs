use std::process::{Command, Stdio};

use crate::domain::tool::CommandLine;
use crate::domain::{AppError, ToolInvocation, ToolOutput, ToolStatus};
use crate::ports::ToolRunner;

/// Runs tools as child processes that inherit the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

fn command_for(invocation: &ToolInvocation) -> Command {
    let mut command = match &invocation.command {
        CommandLine::Argv { program, args } => {
            let mut command = Command::new(program);
            command.args(args);
            command
        }
        CommandLine::Shell(line) => {
            let mut command = Command::new("sh");
            command.arg("-c").arg(line);
            command
        }
    };
    if let Some(cwd) = &invocation.cwd {
        command.current_dir(cwd);
    }
    command
}

fn launch_error(invocation: &ToolInvocation, err: std::io::Error) -> AppError {
    AppError::ToolLaunch { command: invocation.to_string(), details: err.to_string() }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "launching tool");
        let status =
            command_for(invocation).status().map_err(|e| launch_error(invocation, e))?;
        tracing::debug!(command = invocation.program(), status = ?status.code(), "tool finished");

        Ok(ToolStatus { code: status.code() })
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        tracing::debug!(command = %invocation, cwd = ?invocation.cwd, "launching tool for output");
        let output = command_for(invocation)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| launch_error(invocation, e))?;
        tracing::debug!(
            command = invocation.program(),
            status = ?output.status.code(),
            bytes = output.stdout.len(),
            "tool finished"
        );

        Ok(ToolOutput {
            status: ToolStatus { code: output.status.code() },
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
