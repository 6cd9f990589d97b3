use std::path::PathBuf;

use crate::domain::ToolRequirement;

/// Resolves external tools and toolchain environment.
pub trait ToolLocator {
    /// Absolute path of an executable named `name`, if one is reachable.
    fn find(&self, name: &str) -> Option<PathBuf>;

    /// Value of a toolchain environment variable such as `FSLDIR`.
    fn env_var(&self, name: &str) -> Option<String>;

    /// First executable satisfying the requirement.
    fn resolve(&self, requirement: &ToolRequirement) -> Option<PathBuf> {
        requirement.names.iter().find_map(|name| self.find(name))
    }
}
