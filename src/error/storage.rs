use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Write rejected for key '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl StorageError {
    /// Wraps a rejected `setItem` call, keeping whatever message the browser gave.
    pub fn write(key: &str, error: JsValue) -> Self {
        let reason = error
            .as_string()
            .unwrap_or_else(|| format!("{:?}", error));
        StorageError::Write { key: key.to_string(), reason }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serde(error.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::Io(error.to_string())
    }
}
