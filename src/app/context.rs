use crate::domain::BtoConfig;
use crate::ports::{ToolLocator, ToolRunner, VolumeStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ToolRunner, V: VolumeStore, L: ToolLocator> {
    runner: R,
    volumes: V,
    locator: L,
    config: BtoConfig,
}

impl<R: ToolRunner, V: VolumeStore, L: ToolLocator> AppContext<R, V, L> {
    /// Create a new application context.
    pub fn new(runner: R, volumes: V, locator: L, config: BtoConfig) -> Self {
        Self { runner, volumes, locator, config }
    }

    /// Get a reference to the external tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the image volume store.
    pub fn volumes(&self) -> &V {
        &self.volumes
    }

    /// Get a reference to the tool locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &BtoConfig {
        &self.config
    }
}
