use crate::error::AppError;
use crate::models::Profile;
use std::process::ExitCode;

/// Print the profile content as JSON.
pub fn print() -> Result<ExitCode, AppError> {
    println!("{}", serde_json::to_string_pretty(&Profile::load())?);
    Ok(ExitCode::SUCCESS)
}
