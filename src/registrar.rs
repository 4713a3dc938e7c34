//! One-shot publication of the slash command schema to a development guild.
//!
//! Uses the client-credentials grant for a bearer token, then overwrites the
//! guild's command list. The overwrite removes any guild command that is not
//! part of [`command_definitions`].

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use serenity::builder::CreateCommand;
use tracing::info;

use crate::{
    commands::command_definitions,
    config::RegistrarConfig,
    constants::COMMANDS_UPDATE_SCOPE,
    error::RegistrarError,
};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

pub struct Registrar {
    client: Client,
    config: RegistrarConfig,
}

impl Registrar {
    pub fn new(config: RegistrarConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch a token and publish every command
    pub async fn run(&self) -> Result<(), RegistrarError> {
        let token = self.fetch_access_token().await?;
        self.register_commands(&token, &command_definitions()).await?;
        info!("Slash commands registered to guild successfully.");
        Ok(())
    }

    async fn fetch_access_token(&self) -> Result<String, RegistrarError> {
        let response = self
            .client
            .post(format!("{}/oauth2/token", self.config.api_base))
            .basic_auth(&self.config.application_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", COMMANDS_UPDATE_SCOPE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = read_json_body(response).await;
            return Err(RegistrarError::Token(error_message(
                body.as_ref(),
                &["error_description", "error"],
                status,
            )));
        }

        let token: TokenResponse = response.json().await?;
        token
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| RegistrarError::Token("response did not contain an access token".into()))
    }

    async fn register_commands(
        &self,
        token: &str,
        commands: &[CreateCommand],
    ) -> Result<(), RegistrarError> {
        info!(
            "Registering {} commands in guild {}",
            commands.len(),
            self.config.guild_id
        );

        let response = self
            .client
            .put(format!(
                "{}/applications/{}/guilds/{}/commands",
                self.config.api_base, self.config.application_id, self.config.guild_id
            ))
            .bearer_auth(token)
            .json(commands)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = read_json_body(response).await;
            return Err(RegistrarError::Register(error_message(
                body.as_ref(),
                &["message"],
                status,
            )));
        }

        Ok(())
    }
}

/// Error bodies that are not JSON read as `None`
async fn read_json_body(response: Response) -> Option<Value> {
    response.json::<Value>().await.ok()
}

/// First non-empty string field of the body, else the status reason
fn error_message(body: Option<&Value>, fields: &[&str], status: StatusCode) -> String {
    body.and_then(|body| {
        fields
            .iter()
            .find_map(|field| body.get(field).and_then(Value::as_str).filter(|s| !s.is_empty()))
    })
    .map(str::to_string)
    .unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    })
}
