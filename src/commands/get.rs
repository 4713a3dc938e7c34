use serenity::{
    builder::{CreateCommand, CreateCommandOption},
    model::application::CommandOptionType,
};

use crate::{
    error::CommandError,
    models::Interaction,
    store::KvStore,
    utils::messages::{build_entry, build_missing_key, build_not_found},
};

/// Retrieve a stored value for this server or DM
pub fn definition() -> CreateCommand {
    CreateCommand::new("get")
        .description("Retrieve a stored value for this server or DM.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "key", "Key to look up")
                .required(true),
        )
}

pub async fn run(interaction: &Interaction, store: &dyn KvStore) -> Result<String, CommandError> {
    let Some(key) = interaction.option("key") else {
        return Ok(build_missing_key());
    };

    let storage_key = interaction.scope().storage_key(&key);

    match store.get(&storage_key).await? {
        Some(value) => Ok(build_entry(&key, &value)),
        None => Ok(build_not_found(&key)),
    }
}
