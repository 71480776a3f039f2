use super::backend::{entry_size, StorageBackend};
use crate::error::{HrDeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const ENTRY_EXT: &str = ".json";

/// Directory-backed storage: one file per key.
///
/// Keys are escaped into file names (`employees_backup` -> `employees_backup.json`,
/// `a/b` -> `a%2Fb.json`) so any string is a valid key.
pub struct FsBackend {
    root: PathBuf,
    quota: Option<u64>,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root, quota: None }
    }

    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}{}", encode_key(key), ENTRY_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HrDeskError::Io)?;
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(HrDeskError::Io)? {
            let path = entry.map_err(HrDeskError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(key) = name.strip_suffix(ENTRY_EXT).and_then(decode_key) {
                entries.push((key, path));
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    fn used_bytes_excluding(&self, key: &str) -> Result<u64> {
        let mut used = 0;
        for (k, path) in self.entries()? {
            if k == key {
                continue;
            }
            let len = fs::metadata(&path).map_err(HrDeskError::Io)?.len();
            used += k.len() as u64 + len;
        }
        Ok(used)
    }
}

impl StorageBackend for FsBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(HrDeskError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        if let Some(quota) = self.quota {
            let needed = self.used_bytes_excluding(key)? + entry_size(key, value);
            if needed > quota {
                return Err(HrDeskError::StorageQuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        // Atomic write
        let tmp_path = self.root.join(format!(".entry-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(HrDeskError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.entry_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(HrDeskError::Io(e));
        }

        debug!(key, bytes = value.len(), root = %self.root.display(), "wrote entry");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(HrDeskError::Io)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|(k, _)| k).collect())
    }

    fn clear(&self) -> Result<()> {
        for (_, path) in self.entries()? {
            fs::remove_file(path).map_err(HrDeskError::Io)?;
        }
        Ok(())
    }
}

fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for b in key.bytes() {
        if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

fn decode_key(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = name.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            }
            b if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' => {
                out.push(b);
                i += 1;
            }
            // Temp files and anything we didn't write.
            _ => return None,
        }
    }
    String::from_utf8(out).ok()
}
