pub mod file;
pub mod memory;

pub use file::FileHost;
pub use memory::MemoryHost;

use crate::utils::error::{Result, StoreError};
use std::collections::BTreeMap;
use std::sync::PoisonError;

/// Fails when writing `key` = `value` would push usage (key and value bytes) past `quota`.
pub(crate) fn check_quota(
    entries: &BTreeMap<String, String>,
    quota: Option<usize>,
    key: &str,
    value: &str,
) -> Result<()> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let used: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();
    let needed = used + key.len() + value.len();

    if needed > quota {
        return Err(StoreError::QuotaExceeded {
            key: key.to_string(),
            needed,
            quota,
        });
    }
    Ok(())
}

pub(crate) fn lock_poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Host {
        message: "host store lock poisoned".to_string(),
    }
}
