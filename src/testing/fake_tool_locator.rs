use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::ports::ToolLocator;

/// Locator with a fixed set of installed tools.
#[derive(Debug, Clone, Default)]
pub struct FakeToolLocator {
    installed: BTreeMap<String, PathBuf>,
    env: BTreeMap<String, String>,
}

impl FakeToolLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(mut self, names: &[&str]) -> Self {
        for name in names {
            self.installed.insert(name.to_string(), PathBuf::from("/opt/bin").join(name));
        }
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }
}

impl ToolLocator for FakeToolLocator {
    fn find(&self, name: &str) -> Option<PathBuf> {
        self.installed.get(name).cloned()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}
