//! # Configuration
//!
//! Hrdesk configuration is loaded with [`confique`], layered from environment
//! variables, a TOML file and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `HRDESK_DATA_DIR`, `HRDESK_QUOTA_BYTES`, etc.
//! 2. **Config file**: `<data-dir>/hrdesk.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where the key-value files live |
//! | `quota_bytes` | `5242880` | Storage limit, keys plus values |
//! | `employee_code_prefix` | `EMP` | Prefix of generated employee codes |
//! | `employee_code_width` | `3` | Minimum digits after the prefix |
//! | `export_dir` | current dir | Where `export` writes files |

use crate::commands::ids::CodeSequence;
use crate::error::{HrDeskError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "hrdesk.toml";

/// Typical size of a browser local storage area.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HrDeskConfig {
    /// Directory holding the stored keys.
    #[config(env = "HRDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Maximum bytes (keys plus values) the store accepts.
    #[config(default = 5242880, env = "HRDESK_QUOTA_BYTES")]
    pub quota_bytes: u64,

    #[config(default = "EMP", env = "HRDESK_EMPLOYEE_CODE_PREFIX")]
    pub employee_code_prefix: String,

    #[config(default = 3, env = "HRDESK_EMPLOYEE_CODE_WIDTH")]
    pub employee_code_width: usize,

    /// Directory export files are written to.
    #[config(env = "HRDESK_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}

impl Default for HrDeskConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
            employee_code_prefix: "EMP".to_string(),
            employee_code_width: 3,
            export_dir: None,
        }
    }
}

impl HrDeskConfig {
    /// Load from the environment and `<dir>/hrdesk.toml`; a missing file is fine.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILENAME))
            .load()
            .map_err(|e| HrDeskError::Config(e.to_string()))
    }

    /// Load from one file only, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| HrDeskError::Config(e.to_string()))
    }

    /// The configured data directory, or the OS data directory for hrdesk.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        default_data_dir()
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn employee_codes(&self) -> CodeSequence {
        CodeSequence::new(&self.employee_code_prefix, self.employee_code_width)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "hrdesk", "hrdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HrDeskError::Config("Could not determine data directory".to_string()))
}
