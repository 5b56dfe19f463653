//! Request field validation helpers.

use crate::server::error::AppError;

/// Returns the trimmed value of a required text field.
///
/// # Returns
/// - `Ok(String)` - Non-blank trimmed value
/// - `Err(AppError::Validation)` - Field missing or blank
pub fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(field, format!("{} is required", field))),
    }
}

/// Trims an optional text field, mapping blank values to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
