//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! [`Store`] and the [`HrDeskConfig`], and is the single entry point for UI
//! clients.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Supplies configuration** (export directory, employee code sequence)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic and no terminal I/O.
//!
//! ## Generic Over StorageBackend
//!
//! `HrDeskApi<B: StorageBackend>` is generic over the backend:
//! - Production: `HrDeskApi<FsBackend>`
//! - Testing: `HrDeskApi<MemBackend>`

use crate::commands::{self, session::AuthCheck};
use crate::config::HrDeskConfig;
use crate::error::Result;
use crate::model::SessionUser;
use crate::store::fs_backend::FsBackend;
use crate::store::{StorageBackend, Store};
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct HrDeskApi<B: StorageBackend> {
    store: Store<B>,
    config: HrDeskConfig,
}

impl HrDeskApi<FsBackend> {
    /// Open the directory-backed store described by `config`.
    pub fn open(config: HrDeskConfig) -> Result<Self> {
        let backend = FsBackend::new(config.data_dir()?).with_quota(config.quota_bytes);
        Ok(Self::new(Store::with_backend(backend), config))
    }
}

impl<B: StorageBackend> HrDeskApi<B> {
    pub fn new(store: Store<B>, config: HrDeskConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store<B> {
        &mut self.store
    }

    pub fn config(&self) -> &HrDeskConfig {
        &self.config
    }

    pub fn get(&self, key: &str) -> Result<CmdResult> {
        commands::values::get(&self.store, key)
    }

    pub fn set(&mut self, key: &str, json: &str) -> Result<CmdResult> {
        commands::values::set(&mut self.store, key, json)
    }

    pub fn remove(&mut self, key: &str) -> Result<CmdResult> {
        commands::values::remove(&mut self.store, key)
    }

    pub fn keys(&self) -> Result<CmdResult> {
        commands::values::keys(&self.store)
    }

    pub fn next_id(&self, collection: &str) -> Result<u64> {
        commands::ids::next_id(&self.store, collection)
    }

    pub fn next_employee_code(&self) -> Result<String> {
        commands::ids::next_employee_code(&self.store, &self.config.employee_codes())
    }

    /// Export `key` into `dir`, or the configured export directory.
    pub fn export(&self, key: &str, dir: Option<&Path>) -> Result<CmdResult> {
        let dir: PathBuf = dir.map(Path::to_path_buf).unwrap_or_else(|| self.config.export_dir());
        commands::export::run(&self.store, key, &dir)
    }

    pub fn import<F: FnOnce()>(
        &mut self,
        key: &str,
        path: &Path,
        on_complete: F,
    ) -> Result<CmdResult> {
        commands::import::run(&mut self.store, key, path, on_complete)
    }

    pub fn check_auth(&self, page: &str) -> AuthCheck {
        commands::session::check_auth(&self.store, page)
    }

    pub fn current_user(&self) -> Result<SessionUser> {
        commands::session::require_user(&self.store)
    }

    pub fn login(&mut self, username: &str, role: &str) -> Result<CmdResult> {
        commands::session::login(&mut self.store, SessionUser::new(username, role))
    }

    pub fn logout(&mut self) -> Result<CmdResult> {
        commands::session::logout(&mut self.store)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn clear(&mut self, confirmed: bool) -> Result<CmdResult> {
        commands::clear::run(&mut self.store, confirmed)
    }
}
