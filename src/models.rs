use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serenity::model::application::InteractionResponseFlags;

use crate::{
    constants::{DM_SCOPE, STORAGE_KEY_PREFIX},
    store::KvStore,
    utils::validation::provided_text,
};

/// Interaction response type acknowledging a ping
pub const RESPONSE_PONG: u8 = 1;

/// Interaction response type replying with a message
pub const RESPONSE_CHANNEL_MESSAGE: u8 = 4;

/// Kind of an inbound interaction, read from its `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    Unsupported,
}

impl InteractionKind {
    pub fn of(payload: &Value) -> Self {
        match payload.get("type").and_then(Value::as_u64) {
            Some(1) => Self::Ping,
            Some(2) => Self::ApplicationCommand,
            _ => Self::Unsupported,
        }
    }
}

/// The parts of an application-command interaction the bot reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Interaction {
    pub data: Option<InteractionData>,
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<CommandOptionValue>,
}

/// One option the user filled in when invoking a command
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOptionValue {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

impl Interaction {
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.name.as_deref())
    }

    /// Value of the named option, if it was provided and non-empty
    pub fn option(&self, name: &str) -> Option<String> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|option| option.name == name)
            .and_then(|option| provided_text(&option.value))
    }

    pub fn scope(&self) -> Scope {
        Scope::from_guild_id(self.guild_id.as_deref())
    }
}

/// Namespace of stored keys: a guild, or direct messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Guild(String),
    DirectMessage,
}

impl Scope {
    pub fn from_guild_id(guild_id: Option<&str>) -> Self {
        match guild_id {
            Some(id) if !id.is_empty() => Self::Guild(id.to_string()),
            _ => Self::DirectMessage,
        }
    }

    /// Storage key `g:{scope}:{key}`; the user key is kept verbatim
    pub fn storage_key(&self, key: &str) -> String {
        format!("{}:{}:{}", STORAGE_KEY_PREFIX, self, key)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Guild(id) => write!(f, "{}", id),
            Scope::DirectMessage => write!(f, "{}", DM_SCOPE),
        }
    }
}

/// Interaction response envelope returned to the platform
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub content: String,
    pub flags: u64,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_PONG,
            data: None,
        }
    }

    /// Message visible only to the invoking user
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: RESPONSE_CHANNEL_MESSAGE,
            data: Some(MessageData {
                content: content.into(),
                flags: u64::from(InteractionResponseFlags::EPHEMERAL.bits()),
            }),
        }
    }
}

/// State shared across all requests
#[derive(Clone)]
pub struct Data {
    pub store: Arc<dyn KvStore>,
    /// Hex-encoded Ed25519 public key of the application
    pub public_key: Option<String>,
}

impl Data {
    pub fn new(store: Arc<dyn KvStore>, public_key: Option<String>) -> Self {
        Self { store, public_key }
    }
}
