//! Discord interactions webhook that stores and recalls per-server values,
//! plus the registrar that publishes its slash commands.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod registrar;
pub mod server;
pub mod signature;
pub mod store;
pub mod utils;
