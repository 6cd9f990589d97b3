//! External toolchain check.

use std::path::PathBuf;

use crate::domain::tool::{TOOLCHAIN_ENV_VARS, dwi_execute_tools, wrapper_tools};
use crate::domain::{AppError, BtoConfig};
use crate::ports::ToolLocator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCheck {
    pub label: String,
    pub required: bool,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub tools: Vec<ToolCheck>,
    pub env: Vec<(String, Option<String>)>,
    pub exit_code: i32,
}

impl DoctorOutcome {
    pub fn missing_required(&self) -> usize {
        self.tools.iter().filter(|t| t.required && t.path.is_none()).count()
    }
}

pub fn execute<L: ToolLocator>(
    locator: &L,
    config: &BtoConfig,
) -> Result<DoctorOutcome, AppError> {
    let required = dwi_execute_tools(&config.eddy.binary).into_iter().map(|req| (req, true));
    let optional = wrapper_tools().into_iter().map(|req| (req, false));
    let tools: Vec<ToolCheck> = required
        .chain(optional)
        .map(|(req, required)| ToolCheck {
            label: req.label(),
            required,
            path: locator.resolve(&req),
        })
        .collect();

    for tool in &tools {
        match (&tool.path, tool.required) {
            (Some(path), _) => println!("✅ {} -> {}", tool.label, path.display()),
            (None, true) => eprintln!("❌ {} not found", tool.label),
            (None, false) => eprintln!("⚠️  {} not found (optional)", tool.label),
        }
    }

    let env: Vec<(String, Option<String>)> = TOOLCHAIN_ENV_VARS
        .iter()
        .map(|name| (name.to_string(), locator.env_var(name)))
        .collect();
    for (name, value) in &env {
        match value {
            Some(value) => println!("✅ {}={}", name, value),
            None => eprintln!("⚠️  {} is not set", name),
        }
    }

    let mut outcome = DoctorOutcome { tools, env, exit_code: 0 };
    let missing = outcome.missing_required();
    if missing == 0 {
        println!("All required tools found.");
    } else {
        eprintln!("Check failed: {} required tool(s) missing.", missing);
        outcome.exit_code = 1;
    }
    Ok(outcome)
}
