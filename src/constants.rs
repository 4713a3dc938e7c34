/// Header carrying the hex-encoded Ed25519 signature of the request
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";

/// Header carrying the timestamp that prefixes the signed message
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Prefix of every storage key
pub const STORAGE_KEY_PREFIX: &str = "g";

/// Scope segment used for interactions that do not come from a guild
pub const DM_SCOPE: &str = "dm";

/// Base URL of the Discord REST API
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Base URL of the Cloudflare REST API
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// OAuth2 scope needed to overwrite application commands
pub const COMMANDS_UPDATE_SCOPE: &str = "applications.commands.update";

/// Address the interaction server listens on when none is configured
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8787";

/// Log directives for the library and both binaries
pub const LOG_DIRECTIVES: &[&str] = &["kvbot=info", "register_commands=info"];
