//! # Storage Layer
//!
//! This module defines how hrdesk persists values. The [`StorageBackend`] trait
//! is a plain string key-value namespace; [`Store`] layers the backup protocol and
//! typed collections on top of it.
//!
//! ## Backup Protocol
//!
//! Every write goes to two keys:
//!
//! 1. **Primary**: `<key>`
//! 2. **Backup**: `<key>_backup`, the same serialized text
//!
//! Reads use the primary and only fall back to the backup when the primary is
//! absent or empty. The backup mirrors every successful write, bad data
//! included, so it guards against a lost primary entry and nothing more.
//!
//! The two writes are not a transaction. A quota failure on the backup write
//! leaves a fresh primary next to a stale backup; a failure on the primary write
//! aborts before the backup is touched. Each single write is atomic on
//! [`fs_backend::FsBackend`] (temp file + rename).
//!
//! ## Failures on Read
//!
//! [`Store::load`] folds "nothing stored" and "stored but unreadable" into
//! `None`, logging the latter. Use [`Store::try_load`] to tell them apart.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key in a directory.
//! - [`mem_backend::MemBackend`]: for tests, with optional quota and write-error
//!   simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── employees.json          # Collection (JSON array)
//! ├── employees_backup.json   # Backup copy
//! ├── currentUser.json        # Session
//! └── hrdesk.toml             # Configuration
//! ```

use crate::error::{HrDeskError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, error, warn};

pub mod backend;
pub mod collection;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;

pub const BACKUP_SUFFIX: &str = "_backup";

/// The shadow key holding the backup copy of `key`.
pub fn backup_key(key: &str) -> String {
    format!("{}{}", key, BACKUP_SUFFIX)
}

pub struct Store<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Serialize `data` and write it under `key` and its backup key.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, data: &T) -> Result<()> {
        let serialized = serde_json::to_string(data).map_err(|e| {
            error!(key, error = %e, "could not serialize value");
            HrDeskError::SerializationFailure(e)
        })?;
        self.save_raw(key, &serialized)
    }

    /// Write already serialized text under `key` and its backup key.
    pub fn save_raw(&mut self, key: &str, serialized: &str) -> Result<()> {
        if let Err(e) = self.backend.set_item(key, serialized) {
            error!(key, error = %e, "failed to save value");
            return Err(e);
        }

        let backup = backup_key(key);
        if let Err(e) = self.backend.set_item(&backup, serialized) {
            error!(key = %backup, error = %e, "saved primary but failed to save backup");
            return Err(e);
        }

        debug!(key, bytes = serialized.len(), "saved value with backup");
        Ok(())
    }

    /// Raw text under `key`, falling back to the backup when the primary is
    /// absent or empty.
    pub fn load_raw(&self, key: &str) -> Result<Option<String>> {
        if let Some(primary) = self.backend.get_item(key)?.filter(|v| !v.is_empty()) {
            return Ok(Some(primary));
        }

        let backup = self
            .backend
            .get_item(&backup_key(key))?
            .filter(|v| !v.is_empty());
        if backup.is_some() {
            warn!(key, "primary value missing, reading backup copy");
        }
        Ok(backup)
    }

    /// Load and deserialize `key`, distinguishing the reasons it can fail.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let raw = self
            .load_raw(key)?
            .ok_or_else(|| HrDeskError::NotFound(key.to_string()))?;
        serde_json::from_str(&raw).map_err(|source| HrDeskError::DeserializationFailure {
            key: key.to_string(),
            source,
        })
    }

    /// Load and deserialize `key`. `None` when nothing is stored or the stored
    /// value can't be read.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(value) => Some(value),
            Err(HrDeskError::NotFound(_)) => None,
            Err(e) => {
                warn!(key, error = %e, "could not load value, treating as absent");
                None
            }
        }
    }

    /// Remove `key` and its backup copy.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.backend.remove_item(key)?;
        self.backend.remove_item(&backup_key(key))?;
        Ok(())
    }

    /// Wipe the entire namespace, backups included.
    pub fn clear_all(&mut self) -> Result<()> {
        self.backend.clear()?;
        warn!("cleared all stored data");
        Ok(())
    }

    /// Logical keys in the namespace. A key that only survives as a backup copy
    /// is still listed, since [`Store::load`] can read it.
    pub fn keys(&self) -> Result<Vec<String>> {
        let names: BTreeSet<String> = self
            .backend
            .keys()?
            .into_iter()
            .map(|k| match k.strip_suffix(BACKUP_SUFFIX) {
                Some(primary) if !primary.is_empty() => primary.to_string(),
                _ => k,
            })
            .collect();
        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use serde_json::{json, Value};

    fn make_store() -> Store<MemBackend> {
        Store::with_backend(MemBackend::new())
    }

    #[test]
    fn test_save_writes_primary_and_backup() {
        let mut store = make_store();
        store.save("employees", &json!([{"id": 1}])).unwrap();

        let primary = store.backend.get_item("employees").unwrap();
        let backup = store.backend.get_item("employees_backup").unwrap();
        assert_eq!(primary.as_deref(), Some(r#"[{"id":1}]"#));
        assert_eq!(primary, backup);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut store = make_store();
        let value = json!([{"id": 1, "name": "Asha"}, {"id": 2, "name": "Ravi"}]);
        store.save("employees", &value).unwrap();

        let loaded: Value = store.load("employees").unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_load_falls_back_to_backup_when_primary_removed() {
        let mut store = make_store();
        store.save("leaves", &json!([{"id": 7}])).unwrap();
        store.backend.remove_item("leaves").unwrap();

        let loaded: Value = store.load("leaves").unwrap();
        assert_eq!(loaded, json!([{"id": 7}]));
    }

    #[test]
    fn test_load_falls_back_to_backup_when_primary_empty() {
        let mut store = make_store();
        store.save("leaves", &json!([1, 2])).unwrap();
        store.backend.set_item("leaves", "").unwrap();

        let loaded: Vec<u32> = store.load("leaves").unwrap();
        assert_eq!(loaded, vec![1, 2]);
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = make_store();
        assert!(store.load::<Value>("nothing").is_none());
        assert!(matches!(
            store.try_load::<Value>("nothing"),
            Err(HrDeskError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_corrupt_primary_is_none() {
        let store = make_store();
        store.backend.set_item("payroll", "{not json").unwrap();
        store.backend.set_item("payroll_backup", "[1]").unwrap();

        // A present-but-corrupt primary does not trigger the backup fallback.
        assert!(store.load::<Value>("payroll").is_none());
        let err = store.try_load::<Value>("payroll").unwrap_err();
        assert!(matches!(err, HrDeskError::DeserializationFailure { .. }));
    }

    #[test]
    fn test_quota_failure_leaves_prior_value() {
        let mut store = Store::with_backend(MemBackend::new().with_quota(64));
        store.save("k", &json!([1])).unwrap();

        let big = vec![0u8; 100];
        let err = store.save("k", &big).unwrap_err();
        assert!(matches!(err, HrDeskError::StorageQuotaExceeded { .. }));

        let loaded: Vec<u8> = store.load("k").unwrap();
        assert_eq!(loaded, vec![1]);
    }

    #[test]
    fn test_backup_write_failure_is_reported() {
        // Room for the primary copy but not for the backup.
        let mut store = Store::with_backend(MemBackend::new().with_quota(20));
        let err = store.save_raw("k", "0123456789").unwrap_err();
        assert!(matches!(err, HrDeskError::StorageQuotaExceeded { .. }));

        assert_eq!(
            store.backend.get_item("k").unwrap().as_deref(),
            Some("0123456789")
        );
        assert_eq!(store.backend.get_item("k_backup").unwrap(), None);
    }

    #[test]
    fn test_remove_drops_backup_too() {
        let mut store = make_store();
        store.save("k", &1).unwrap();
        store.remove("k").unwrap();
        assert!(store.load::<u32>("k").is_none());
    }

    #[test]
    fn test_clear_all() {
        let mut store = make_store();
        store.save("a", &1).unwrap();
        store.save("b", &2).unwrap();
        store.clear_all().unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn test_keys_hide_backup_copies() {
        let mut store = make_store();
        store.save("employees", &json!([])).unwrap();
        store.save("leaves", &json!([])).unwrap();
        store.backend.remove_item("leaves").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["employees", "leaves"]);
    }
}
