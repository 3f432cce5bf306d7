use crate::core::normalizer::{decode_on_read, encode_on_write};
use crate::domain::model::{EngineOptions, Value};
use crate::domain::ports::{HostStore, StorageEngine};
use crate::utils::error::Result;
use crate::utils::validation::validate_key;
use std::future::{ready, Future};

/// Storage engine over a synchronous host key/value store.
///
/// Each operation runs its host call to completion and hands back an already
/// settled future. Host errors are forwarded unchanged.
#[derive(Debug, Clone)]
pub struct LocalStorageEngine<H> {
    host: H,
}

impl<H: HostStore> LocalStorageEngine<H> {
    pub fn new(host: H, options: EngineOptions) -> Self {
        let ignored = options.ignored_keys();
        if !ignored.is_empty() {
            tracing::debug!("Ignoring unrecognized engine options: {:?}", ignored);
        }
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn get_now(&self, key: &str) -> Result<Option<Value>> {
        validate_key(key)?;
        let raw = self.host.get_item(key)?;
        tracing::debug!(key, found = raw.is_some(), "get");
        Ok(raw.map(|raw| decode_on_read(&raw).into_value()))
    }

    fn set_now(&self, key: &str, value: &Value) -> Result<()> {
        validate_key(key)?;
        let encoded = encode_on_write(value)?;
        self.host.set_item(key, &encoded)?;
        tracing::debug!(key, bytes = encoded.len(), "set");
        Ok(())
    }

    fn remove_now(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.host.remove_item(key)?;
        tracing::debug!(key, "remove");
        Ok(())
    }

    fn clear_now(&self) -> Result<()> {
        self.host.clear()?;
        tracing::debug!("clear");
        Ok(())
    }
}

impl<H: HostStore> StorageEngine for LocalStorageEngine<H> {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Value>>> + Send {
        ready(self.get_now(key))
    }

    fn set(&self, key: &str, value: &Value) -> impl Future<Output = Result<()>> + Send {
        ready(self.set_now(key, value))
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send {
        ready(self.remove_now(key))
    }

    fn clear(&self) -> impl Future<Output = Result<()>> + Send {
        ready(self.clear_now())
    }
}
