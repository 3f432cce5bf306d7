#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "localstore")]
#[command(about = "Key/value storage engine over a local host store")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Store directory (overrides store.path)")]
    pub store: Option<String>,

    #[arg(long, help = "Storage quota in bytes (overrides store.quota_bytes)")]
    pub quota_bytes: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Read and decode a value
    Get { key: String },
    /// Store a value (JSON when it parses, otherwise a plain string)
    Set { key: String, value: String },
    /// Delete a key
    Remove { key: String },
    /// Delete every key
    Clear,
    /// Print the stored string without decoding
    Raw { key: String },
    /// List stored keys
    Keys,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file, if any, and applies command line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(store) = &self.store {
            config.store.path = store.clone();
        }
        if self.quota_bytes.is_some() {
            config.store.quota_bytes = self.quota_bytes;
        }
        Ok(config)
    }
}
