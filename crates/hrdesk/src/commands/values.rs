//! Raw access to stored keys, for UIs that browse or patch the namespace.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HrDeskError, Result};
use crate::store::{StorageBackend, Store};
use serde_json::Value;

pub fn get<B: StorageBackend>(store: &Store<B>, key: &str) -> Result<CmdResult> {
    let value: Value = store.try_load(key)?;
    Ok(CmdResult::default().with_value(value))
}

/// Store `json` under `key` after checking that it parses.
pub fn set<B: StorageBackend>(store: &mut Store<B>, key: &str, json: &str) -> Result<CmdResult> {
    let value: Value =
        serde_json::from_str(json).map_err(|source| HrDeskError::DeserializationFailure {
            key: key.to_string(),
            source,
        })?;
    store.save(key, &value)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Saved {}", key)));
    Ok(result)
}

pub fn remove<B: StorageBackend>(store: &mut Store<B>, key: &str) -> Result<CmdResult> {
    if store.load_raw(key)?.is_none() {
        return Err(HrDeskError::NotFound(key.to_string()));
    }
    store.remove(key)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed {}", key)));
    Ok(result)
}

pub fn keys<B: StorageBackend>(store: &Store<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_keys(store.keys()?))
}
