use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HrDeskError, Result};
use crate::store::{StorageBackend, Store};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Replace the value under `key` with the JSON in `text`. No merge: whatever
/// was stored is overwritten, backup included. Unparseable text leaves storage
/// untouched.
pub fn import_str<B: StorageBackend>(store: &mut Store<B>, key: &str, text: &str) -> Result<()> {
    let data: Value = serde_json::from_str(text).map_err(|source| {
        warn!(key, error = %source, "import rejected, not valid JSON");
        HrDeskError::DeserializationFailure {
            key: key.to_string(),
            source,
        }
    })?;
    store.save(key, &data)
}

/// Import the file at `path` into `key`, then run `on_complete`.
///
/// The callback only runs after the new value is stored.
pub fn run<B, F>(
    store: &mut Store<B>,
    key: &str,
    path: &Path,
    on_complete: F,
) -> Result<CmdResult>
where
    B: StorageBackend,
    F: FnOnce(),
{
    let text = fs::read_to_string(path).map_err(HrDeskError::Io)?;
    import_str(store, key, &text)?;
    info!(key, path = %path.display(), "imported key");

    on_complete();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data imported into {} from {}",
        key,
        path.display()
    )));
    Ok(result)
}
