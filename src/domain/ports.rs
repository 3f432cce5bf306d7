use crate::domain::model::Value;
use crate::utils::error::Result;
use std::sync::Arc;

/// Synchronous string-keyed store provided by the host environment.
///
/// Every call is atomic: a failed `set_item` leaves the previous value in place.
/// `get_item` returns `None` for a missing key.
pub trait HostStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<H: HostStore + ?Sized> HostStore for Arc<H> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// The four-operation contract shared by every storage backend.
pub trait StorageEngine: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Value>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &Value,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}
