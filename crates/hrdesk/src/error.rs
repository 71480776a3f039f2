use thiserror::Error;

#[derive(Error, Debug)]
pub enum HrDeskError {
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    StorageQuotaExceeded { key: String, needed: u64, quota: u64 },

    #[error("Serialization error: {0}")]
    SerializationFailure(#[source] serde_json::Error),

    #[error("Could not parse value stored under '{key}': {source}")]
    DeserializationFailure {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Nothing stored under '{0}'")]
    NotFound(String),

    #[error("Record id {0} already exists in collection")]
    DuplicateId(u64),

    #[error("Record not found: {0}")]
    RecordNotFound(u64),

    #[error("No id left after u64::MAX in collection '{0}'")]
    IdOverflow(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, HrDeskError>;
