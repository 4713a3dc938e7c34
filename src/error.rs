//! Error types shared by the handler and the registrar.

use thiserror::Error;

/// A required setting is missing or unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure talking to a key-value backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store responded with {status}: {message}")]
    Upstream { status: u16, message: String },
}

/// Failure while executing an application command
///
/// Never shown to the user; the handler logs it and answers with a generic message.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Malformed interaction payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Failure while publishing the command schema
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Failed to obtain access token: {0}")]
    Token(String),

    #[error("Failed to register commands: {0}")]
    Register(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
