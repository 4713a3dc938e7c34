//! Configuration objects for the interaction server and the command registrar.
//!
//! Both are built from the process environment in the binaries, and built
//! directly (or from a lookup closure) in tests.

use std::net::SocketAddr;

use crate::{
    constants::{CLOUDFLARE_API_BASE, DEFAULT_BIND_ADDRESS, DISCORD_API_BASE},
    error::ConfigError,
};

/// Credentials and location of a Workers KV namespace
#[derive(Clone, Debug)]
pub struct CloudflareKvConfig {
    pub account_id: String,
    pub namespace_id: String,
    pub api_token: String,
    pub api_base: String,
}

/// Which key-value backend the handler talks to
#[derive(Clone, Debug)]
pub enum StoreBackend {
    Memory,
    Postgres { database_url: String },
    Cloudflare(CloudflareKvConfig),
}

/// Configuration of the interaction server
#[derive(Clone, Debug)]
pub struct HandlerConfig {
    /// Hex-encoded Ed25519 public key; `None` rejects every request
    pub public_key: Option<String>,
    pub bind_address: SocketAddr,
    pub backend: StoreBackend,
}

impl HandlerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let public_key = non_empty(&lookup, "DISCORD_PUBLIC_KEY");

        let bind_address = non_empty(&lookup, "BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDRESS",
                reason: e.to_string(),
            })?;

        let backend = match non_empty(&lookup, "KV_BACKEND").as_deref() {
            None | Some("memory") => StoreBackend::Memory,
            Some("postgres") => StoreBackend::Postgres {
                database_url: required(&lookup, "DATABASE_URL")?,
            },
            Some("cloudflare") => StoreBackend::Cloudflare(CloudflareKvConfig {
                account_id: required(&lookup, "CLOUDFLARE_ACCOUNT_ID")?,
                namespace_id: required(&lookup, "CLOUDFLARE_KV_NAMESPACE_ID")?,
                api_token: required(&lookup, "CLOUDFLARE_API_TOKEN")?,
                api_base: non_empty(&lookup, "CLOUDFLARE_API_BASE")
                    .unwrap_or_else(|| CLOUDFLARE_API_BASE.to_string()),
            }),
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "KV_BACKEND",
                    reason: format!("expected memory, postgres or cloudflare, got '{}'", other),
                });
            }
        };

        Ok(Self {
            public_key,
            bind_address,
            backend,
        })
    }
}

/// Configuration of the one-shot command registrar
#[derive(Clone, Debug)]
pub struct RegistrarConfig {
    pub application_id: String,
    pub client_secret: String,
    pub guild_id: String,
    pub api_base: String,
}

impl RegistrarConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Build the configuration from any variable source
    ///
    /// Settings are checked in order and the first missing one is reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let application_id = required(&lookup, "DISCORD_APPLICATION_ID")?;
        let client_secret = required(&lookup, "DISCORD_CLIENT_SECRET")?;
        let guild_id = required(&lookup, "DEV_GUILD_ID")?;
        let api_base = non_empty(&lookup, "DISCORD_API_BASE")
            .unwrap_or_else(|| DISCORD_API_BASE.to_string());

        Ok(Self {
            application_id,
            client_secret,
            guild_id,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Empty values count as unset
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    non_empty(lookup, name).ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_handler_defaults() {
        let config = HandlerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.public_key.is_none());
        assert_eq!(config.bind_address, "0.0.0.0:8787".parse().unwrap());
        assert!(matches!(config.backend, StoreBackend::Memory));
    }

    #[test]
    fn test_handler_postgres_requires_database_url() {
        let err = HandlerConfig::from_lookup(lookup_from(&[("KV_BACKEND", "postgres")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));

        let config = HandlerConfig::from_lookup(lookup_from(&[
            ("KV_BACKEND", "postgres"),
            ("DATABASE_URL", "postgres://localhost/kv"),
        ]))
        .unwrap();
        assert!(matches!(
            config.backend,
            StoreBackend::Postgres { ref database_url } if database_url == "postgres://localhost/kv"
        ));
    }

    #[test]
    fn test_handler_cloudflare_backend() {
        let config = HandlerConfig::from_lookup(lookup_from(&[
            ("KV_BACKEND", "cloudflare"),
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_KV_NAMESPACE_ID", "ns"),
            ("CLOUDFLARE_API_TOKEN", "token"),
        ]))
        .unwrap();
        match config.backend {
            StoreBackend::Cloudflare(kv) => {
                assert_eq!(kv.account_id, "acct");
                assert_eq!(kv.api_base, CLOUDFLARE_API_BASE);
            }
            other => panic!("unexpected backend {:?}", other),
        }
    }

    #[test]
    fn test_handler_rejects_unknown_backend_and_bad_address() {
        assert!(matches!(
            HandlerConfig::from_lookup(lookup_from(&[("KV_BACKEND", "redis")])),
            Err(ConfigError::Invalid { name: "KV_BACKEND", .. })
        ));
        assert!(matches!(
            HandlerConfig::from_lookup(lookup_from(&[("BIND_ADDRESS", "nowhere")])),
            Err(ConfigError::Invalid { name: "BIND_ADDRESS", .. })
        ));
    }

    #[test]
    fn test_registrar_reports_first_missing_variable() {
        let err = RegistrarConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DISCORD_APPLICATION_ID"
        );

        let err = RegistrarConfig::from_lookup(lookup_from(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_CLIENT_SECRET", ""),
            ("DEV_GUILD_ID", "456"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DISCORD_CLIENT_SECRET")));
    }

    #[test]
    fn test_registrar_config() {
        let config = RegistrarConfig::from_lookup(lookup_from(&[
            ("DISCORD_APPLICATION_ID", "123"),
            ("DISCORD_CLIENT_SECRET", "secret"),
            ("DEV_GUILD_ID", "456"),
            ("DISCORD_API_BASE", "http://127.0.0.1:9000/"),
        ]))
        .unwrap();
        assert_eq!(config.application_id, "123");
        assert_eq!(config.guild_id, "456");
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
    }
}
