pub mod config;
pub mod core;
pub mod domain;
pub mod host;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use core::engine::LocalStorageEngine;
pub use core::normalizer::{decode_on_read, encode_on_write};
pub use domain::model::{Decoded, EngineOptions, Value};
pub use domain::ports::{HostStore, StorageEngine};
pub use host::{FileHost, MemoryHost};
pub use utils::error::{Result, StoreError};
