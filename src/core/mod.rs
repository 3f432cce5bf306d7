pub mod engine;
pub mod normalizer;

pub use crate::domain::model::{Decoded, EngineOptions, Value};
pub use crate::domain::ports::{HostStore, StorageEngine};
pub use crate::utils::error::Result;
