//! Doctor command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_doctor(config: Option<&Path>) -> Result<i32, AppError> {
    let outcome = crate::app::api::doctor(config)?;

    Ok(outcome.exit_code)
}
