pub mod acquisition;
pub mod bids;
pub mod config;
pub mod error;
pub mod gradients;
pub mod motion;
pub mod naming;
pub mod protocol;
pub mod slspec;
pub mod tool;

pub use config::BtoConfig;
pub use error::AppError;
pub use naming::ImageName;
pub use tool::{ToolInvocation, ToolOutput, ToolRequirement, ToolStatus};
