mod nifti_volume_store;
mod path_tool_locator;
mod process_tool_runner;

pub use nifti_volume_store::NiftiVolumeStore;
pub use path_tool_locator::PathToolLocator;
pub use process_tool_runner::ProcessToolRunner;
