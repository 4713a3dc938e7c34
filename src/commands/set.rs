use serenity::{
    builder::{CreateCommand, CreateCommandOption},
    model::application::CommandOptionType,
};
use tracing::info;

use crate::{
    error::CommandError,
    models::Interaction,
    store::KvStore,
    utils::messages::{build_missing_set_options, build_saved},
};

/// Store a value for this server or DM
pub fn definition() -> CreateCommand {
    CreateCommand::new("set")
        .description("Store a value for this server or DM.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "key", "Key to set").required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "value", "Value to store")
                .required(true),
        )
}

pub async fn run(interaction: &Interaction, store: &dyn KvStore) -> Result<String, CommandError> {
    let (Some(key), Some(value)) = (interaction.option("key"), interaction.option("value")) else {
        return Ok(build_missing_set_options());
    };

    let storage_key = interaction.scope().storage_key(&key);
    store.put(&storage_key, &value).await?;

    info!("Stored value under {}", storage_key);

    Ok(build_saved(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::tests::command, store::MemoryStore};

    async fn run_payload(payload: serde_json::Value, store: &MemoryStore) -> String {
        let interaction: Interaction = serde_json::from_value(payload).unwrap();
        run(&interaction, store).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_requires_key_and_value() {
        let store = MemoryStore::new();

        let reply = run_payload(command("set", Some("g1"), &[("key", "foo")]), &store).await;
        assert_eq!(reply, "Both key and value must be provided.");

        let reply = run_payload(command("set", Some("g1"), &[("value", "bar")]), &store).await;
        assert_eq!(reply, "Both key and value must be provided.");

        let reply =
            run_payload(command("set", Some("g1"), &[("key", ""), ("value", "bar")]), &store).await;
        assert_eq!(reply, "Both key and value must be provided.");

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_set_escapes_key_in_reply_only() {
        let store = MemoryStore::new();

        let reply = run_payload(
            command("set", Some("g1"), &[("key", "*bold*"), ("value", "__x__")]),
            &store,
        )
        .await;

        assert_eq!(reply, "Saved **\\*bold\\***.");
        assert_eq!(
            store.get("g:g1:*bold*").await.unwrap().as_deref(),
            Some("__x__")
        );
    }
}
