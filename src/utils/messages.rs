//! Pure functions building the chat replies of the key-value commands

use super::markdown::escape_markdown;

/// Reply when `set` is missing one of its options
pub fn build_missing_set_options() -> String {
    "Both key and value must be provided.".to_string()
}

/// Reply when `get` is missing its key
pub fn build_missing_key() -> String {
    "Key must be provided.".to_string()
}

/// Confirmation after a value was stored
pub fn build_saved(key: &str) -> String {
    format!("Saved **{}**.", escape_markdown(key))
}

/// Reply when nothing is stored under the key
pub fn build_not_found(key: &str) -> String {
    format!("No value found for **{}**.", escape_markdown(key))
}

/// Show a stored entry
pub fn build_entry(key: &str, value: &str) -> String {
    format!("**{}** → {}", escape_markdown(key), escape_markdown(value))
}

pub fn build_unknown_command(name: &str) -> String {
    format!("Unknown command: {}", name)
}

/// Generic reply for internal failures (doesn't expose internals)
pub fn build_internal_error() -> String {
    "An unexpected error occurred. Please try again later.".to_string()
}
