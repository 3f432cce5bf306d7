use crate::domain::ports::HostStore;
use crate::host::{check_quota, lock_poisoned};
use crate::utils::error::{Result, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const STORE_FILE: &str = "localstore.json";

/// Host store persisted as a single JSON object on disk.
///
/// The file is rewritten through a temporary file and a rename, and the
/// in-memory copy only changes once that succeeds.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl FileHost {
    pub fn open<P: AsRef<Path>>(dir: P, quota: Option<usize>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StoreError::HostUnavailable {
            reason: format!("cannot create {}: {}", dir.display(), e),
        })?;

        let path = dir.join(STORE_FILE);
        let entries: BTreeMap<String, String> = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StoreError::HostUnavailable {
                reason: format!("cannot read {}: {}", path.display(), e),
            })?;
            serde_json::from_str(&content).map_err(|e| StoreError::HostUnavailable {
                reason: format!("{} is not a valid store file: {}", path.display(), e),
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened file host at {} ({} entries)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
            quota,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock().map_err(lock_poisoned)?;
        Ok(entries.keys().cloned().collect())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> Result<()>,
    {
        let mut entries = self.entries.lock().map_err(lock_poisoned)?;
        let mut next = entries.clone();
        apply(&mut next)?;
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

impl HostStore for FileHost {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(lock_poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            check_quota(entries, self.quota, key, value)?;
            entries.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
            Ok(())
        })
    }

    fn clear(&self) -> Result<()> {
        self.update(|entries| {
            entries.clear();
            Ok(())
        })
    }
}
