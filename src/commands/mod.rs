//! Slash command schema and dispatch.

mod get;
mod set;

use serde_json::Value;
use serenity::builder::CreateCommand;
use tracing::info;

use crate::{
    error::CommandError, models::Interaction, store::KvStore,
    utils::messages::build_unknown_command,
};

/// Every command the bot publishes, in registration order
pub fn command_definitions() -> Vec<CreateCommand> {
    vec![set::definition(), get::definition()]
}

/// Run the application command in `payload` and return the reply content
pub async fn execute(payload: Value, store: &dyn KvStore) -> Result<String, CommandError> {
    let interaction: Interaction = serde_json::from_value(payload)?;

    let name = interaction.command_name().unwrap_or_default();
    info!("Running command '{}' in scope {}", name, interaction.scope());

    match name {
        "set" => set::run(&interaction, store).await,
        "get" => get::run(&interaction, store).await,
        other => Ok(build_unknown_command(other)),
    }
}
