//! HTTP request handlers.

pub mod download;
pub mod health;
pub mod portal;

/// First declared validation message, for 400 bodies.
pub(crate) fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".to_string())
}
