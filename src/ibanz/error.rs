use crate::model::{Field, RecordId};
use thiserror::Error;

/// Failures coming from the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum IbanzError {
    #[error("{0} is required")]
    Validation(Field),

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Api Error: {0}")]
    Api(String),
}

impl IbanzError {
    /// The offending field, for validation failures.
    pub fn field(&self) -> Option<Field> {
        match self {
            IbanzError::Validation(field) => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IbanzError {
    fn from(err: std::io::Error) -> Self {
        IbanzError::Storage(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for IbanzError {
    fn from(err: serde_json::Error) -> Self {
        IbanzError::Storage(StorageError::Serialization(err))
    }
}

pub type Result<T> = std::result::Result<T, IbanzError>;
