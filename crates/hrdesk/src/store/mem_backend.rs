use super::backend::{entry_size, StorageBackend};
use crate::error::{HrDeskError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory storage backend.
///
/// Uses `RefCell` for interior mutability since hrdesk is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<BTreeMap<String, String>>,
    quota: Option<u64>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size (keys plus values) this backend accepts.
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Bytes currently used, counted the same way the quota is.
    pub fn used_bytes(&self) -> u64 {
        self.items
            .borrow()
            .iter()
            .map(|(k, v)| entry_size(k, v))
            .sum()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(HrDeskError::Store("Simulated write error".to_string()));
        }

        if let Some(quota) = self.quota {
            let items = self.items.borrow();
            let replaced = items.get(key).map(|v| entry_size(key, v)).unwrap_or(0);
            let needed = self.used_bytes() - replaced + entry_size(key, value);
            if needed > quota {
                return Err(HrDeskError::StorageQuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.items.borrow().keys().cloned().collect())
    }

    fn clear(&self) -> Result<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}
