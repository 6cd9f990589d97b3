mod tool_locator;
mod tool_runner;
mod volume_store;

pub use tool_locator::ToolLocator;
pub use tool_runner::ToolRunner;
pub use volume_store::VolumeStore;
