use crate::config::Command;
use crate::core::engine::LocalStorageEngine;
use crate::core::{HostStore, StorageEngine, Value};
use crate::host::FileHost;
use crate::utils::error::Result;

/// Reads a command line value as JSON, falling back to a plain string.
pub fn parse_value(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

/// Runs one subcommand and returns the text to print, if any.
pub async fn run_command(
    engine: &LocalStorageEngine<FileHost>,
    command: &Command,
) -> Result<Option<String>> {
    match command {
        Command::Get { key } => {
            let value = engine.get(key).await?;
            Ok(Some(serde_json::to_string(&value)?))
        }
        Command::Set { key, value } => {
            engine.set(key, &parse_value(value)).await?;
            tracing::info!("Stored '{}'", key);
            Ok(None)
        }
        Command::Remove { key } => {
            engine.remove(key).await?;
            tracing::info!("Removed '{}'", key);
            Ok(None)
        }
        Command::Clear => {
            engine.clear().await?;
            tracing::info!("Cleared {}", engine.host().path().display());
            Ok(None)
        }
        Command::Raw { key } => Ok(engine.host().get_item(key)?),
        Command::Keys => Ok(Some(engine.host().keys()?.join("\n"))),
    }
}
