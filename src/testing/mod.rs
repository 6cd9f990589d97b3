mod fake_tool_locator;
mod fake_tool_runner;
mod fixtures;

#[allow(unused_imports)]
pub use fake_tool_locator::FakeToolLocator;
#[allow(unused_imports)]
pub use fake_tool_runner::FakeToolRunner;
#[allow(unused_imports)]
pub use fixtures::{write_image, write_volumes};
