use crate::error::Result;

/// Abstract interface for raw key-value I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `Store` handles the "what" (backup copies, collections, ids).
///
/// Keys and values are plain strings, the same shape as a browser storage area.
pub trait StorageBackend {
    /// Read the value under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing what was there.
    /// Fails with `StorageQuotaExceeded` when the write would not fit; the old
    /// value is left in place in that case.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>>;

    /// Remove every key in this namespace.
    fn clear(&self) -> Result<()>;
}

/// Bytes an entry occupies against a quota: key plus value, as browsers count it.
pub(crate) fn entry_size(key: &str, value: &str) -> u64 {
    (key.len() + value.len()) as u64
}
