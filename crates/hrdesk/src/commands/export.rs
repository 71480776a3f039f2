use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HrDeskError, Result};
use crate::store::{StorageBackend, Store};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// One key, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

/// `<key>_<YYYY-MM-DD>.json`
pub fn export_filename(key: &str, date: NaiveDate) -> String {
    format!("{}_{}.json", key, date.format("%Y-%m-%d"))
}

/// The primary value stored under `key`, verbatim, with its export file name.
/// `None` when nothing is stored under the primary key.
pub fn export_contents<B: StorageBackend>(
    store: &Store<B>,
    key: &str,
    date: NaiveDate,
) -> Result<Option<ExportFile>> {
    let contents = store.backend().get_item(key)?.filter(|v| !v.is_empty());
    Ok(contents.map(|contents| ExportFile {
        filename: export_filename(key, date),
        contents,
    }))
}

/// Write `key` to `<dir>/<key>_<today>.json` (UTC date).
pub fn run<B: StorageBackend>(store: &Store<B>, key: &str, dir: &Path) -> Result<CmdResult> {
    let today = Utc::now().date_naive();
    let Some(export) = export_contents(store, key, today)? else {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info(format!("Nothing stored under '{}'.", key)));
        return Ok(res);
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(HrDeskError::Io)?;
    }
    let path = dir.join(&export.filename);
    fs::write(&path, &export.contents).map_err(HrDeskError::Io)?;
    info!(key, path = %path.display(), "exported key");

    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} to {}",
        key,
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("employees", date("2024-07-01")),
            "employees_2024-07-01.json"
        );
    }

    #[test]
    fn test_export_contents_is_stored_text() {
        let mut store = InMemoryStore::new();
        store
            .save("employees", &json!([{"id": 1, "name": "Asha"}]))
            .unwrap();

        let export = export_contents(&store, "employees", date("2024-07-01"))
            .unwrap()
            .unwrap();
        assert_eq!(export.contents, r#"[{"id":1,"name":"Asha"}]"#);
    }

    #[test]
    fn test_export_ignores_backup_only_keys() {
        let mut store = InMemoryStore::new();
        store.save("leaves", &json!([])).unwrap();
        store.backend().remove_item("leaves").unwrap();

        assert!(export_contents(&store, "leaves", date("2024-07-01"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_run_writes_file() {
        let mut store = InMemoryStore::new();
        store.save("payroll", &json!([{"id": 3}])).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let res = run(&store, "payroll", dir.path()).unwrap();
        assert_eq!(res.paths.len(), 1);
        let written = fs::read_to_string(&res.paths[0]).unwrap();
        assert_eq!(written, r#"[{"id":3}]"#);

        let name = res.paths[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("payroll_") && name.ends_with(".json"));
    }

    #[test]
    fn test_run_missing_key_writes_nothing() {
        let store = InMemoryStore::new();
        let dir = tempfile::tempdir().unwrap();

        let res = run(&store, "payroll", dir.path()).unwrap();
        assert!(res.paths.is_empty());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
