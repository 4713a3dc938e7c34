/// Utility modules for common functionality
pub mod markdown;
pub mod messages;
pub mod validation;
