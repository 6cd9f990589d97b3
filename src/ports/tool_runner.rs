use crate::domain::{AppError, ToolInvocation, ToolOutput, ToolStatus};

/// Runs external commands synchronously.
pub trait ToolRunner {
    /// Run a command to completion.
    ///
    /// A non-zero exit is reported through `ToolStatus`; `Err` means the
    /// command could not be launched at all.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError>;

    /// Run a command to completion, collecting its standard output.
    fn capture(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError>;
}
