use crate::domain::ports::HostStore;
use crate::host::{check_quota, lock_poisoned};
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-process host store with an optional byte quota.
#[derive(Debug, Default)]
pub struct MemoryHost {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.entries.lock().map_err(lock_poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl HostStore for MemoryHost {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(lock_poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(lock_poisoned)?;
        check_quota(&entries, self.quota, key, value)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.entries.lock().map_err(lock_poisoned)?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().map_err(lock_poisoned)?.clear();
        Ok(())
    }
}
