use hrdesk::error::HrDeskError;
use hrdesk::store::fs_backend::FsBackend;
use hrdesk::store::StorageBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    backend.set_item("employees", "[]").unwrap();
    assert_eq!(backend.get_item("employees").unwrap(), Some("[]".to_string()));

    backend.remove_item("employees").unwrap();
    assert_eq!(backend.get_item("employees").unwrap(), None);

    // Removing twice is fine
    backend.remove_item("employees").unwrap();
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.set_item("employees", "[1]").unwrap();
    backend.set_item("employees", "[1,2]").unwrap();

    let on_disk = fs::read_to_string(dir.path().join("employees.json")).unwrap();
    assert_eq!(on_disk, "[1,2]");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    assert!(backend.keys().unwrap().is_empty());
    backend.set_item("k", "1").unwrap();
    assert!(root.join("k.json").exists());
}

#[test]
fn test_fs_backend_keys_skip_foreign_files() {
    let (dir, backend) = setup();
    backend.set_item("employees", "[]").unwrap();
    backend.set_item("a/b c", "1").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
    fs::write(dir.path().join("hrdesk.toml"), "quota_bytes = 1").unwrap();

    assert_eq!(backend.keys().unwrap(), vec!["a/b c", "employees"]);
    assert_eq!(backend.get_item("a/b c").unwrap(), Some("1".to_string()));
}

#[test]
fn test_fs_backend_clear_keeps_foreign_files() {
    let (dir, backend) = setup();
    backend.set_item("a", "1").unwrap();
    backend.set_item("b", "2").unwrap();
    fs::write(dir.path().join("hrdesk.toml"), "").unwrap();

    backend.clear().unwrap();
    assert!(backend.keys().unwrap().is_empty());
    assert!(dir.path().join("hrdesk.toml").exists());
}

#[test]
fn test_fs_backend_quota() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf()).with_quota(16);

    // "k" + 10 bytes
    backend.set_item("k", "0123456789").unwrap();
    // Replacing the same key is measured without the old value
    backend.set_item("k", "9876543210").unwrap();

    let err = backend.set_item("other", "0123456789").unwrap_err();
    assert!(matches!(err, HrDeskError::StorageQuotaExceeded { .. }));
    assert_eq!(backend.get_item("other").unwrap(), None);
    assert_eq!(
        backend.get_item("k").unwrap(),
        Some("9876543210".to_string())
    );
}

#[test]
fn test_fs_backend_failed_rename_removes_tmp_file() {
    let (dir, backend) = setup();
    // A non-empty directory where the entry file should go makes the rename fail.
    let blocker = dir.path().join("employees.json");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    let err = backend.set_item("employees", "[1]").unwrap_err();
    assert!(matches!(err, HrDeskError::Io(_)));

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
