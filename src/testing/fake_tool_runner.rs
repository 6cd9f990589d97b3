use std::sync::Mutex;

use crate::domain::{AppError, ToolInvocation, ToolOutput, ToolStatus};
use crate::ports::ToolRunner;

type Effect = Box<dyn Fn(&ToolInvocation) + Send + Sync>;
type Stdout = Box<dyn Fn(&ToolInvocation) -> String + Send + Sync>;

/// Records invocations instead of launching processes.
#[derive(Default)]
pub struct FakeToolRunner {
    pub calls: Mutex<Vec<ToolInvocation>>,
    failing: Vec<String>,
    effects: Vec<(String, Effect)>,
    stdout: Vec<(String, Stdout)>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation whose display contains `needle` exit with 1.
    pub fn failing_on(mut self, needle: &str) -> Self {
        self.failing.push(needle.to_string());
        self
    }

    /// Run `effect` for invocations of `program`, e.g. to create outputs.
    pub fn with_effect<F>(mut self, program: &str, effect: F) -> Self
    where
        F: Fn(&ToolInvocation) + Send + Sync + 'static,
    {
        self.effects.push((program.to_string(), Box::new(effect)));
        self
    }

    /// Standard output `capture` returns for invocations of `program`.
    pub fn with_stdout<F>(mut self, program: &str, stdout: F) -> Self
    where
        F: Fn(&ToolInvocation) -> String + Send + Sync + 'static,
    {
        self.stdout.push((program.to_string(), Box::new(stdout)));
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(ToString::to_string).collect()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolStatus, AppError> {
        self.calls.lock().unwrap().push(invocation.clone());
        let line = invocation.to_string();
        if self.failing.iter().any(|needle| line.contains(needle)) {
            return Ok(ToolStatus::failed(1));
        }
        for (program, effect) in &self.effects {
            if invocation.program() == program {
                effect(invocation);
            }
        }
        Ok(ToolStatus::success())
    }

    fn capture(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let status = self.run(invocation)?;
        let stdout = self
            .stdout
            .iter()
            .filter(|(program, _)| status.is_success() && invocation.program() == program)
            .map(|(_, stdout)| stdout(invocation))
            .collect();
        Ok(ToolOutput { status, stdout })
    }
}
