use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Host store unavailable: {reason}")]
    HostUnavailable { reason: String },

    #[error("Quota exceeded writing '{key}': {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Unsupported value type: {kind} values must be serialized by the caller")]
    UnsupportedValue { kind: String },

    #[error("Invalid key: keys must be non-empty strings")]
    InvalidKey,

    #[error("Host store error: {message}")]
    Host { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StoreError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::HostUnavailable { .. } => {
                "The storage location could not be opened".to_string()
            }
            StoreError::QuotaExceeded { key, .. } => {
                format!("Not enough storage space left to save '{}'", key)
            }
            StoreError::UnsupportedValue { kind } => {
                format!("Cannot store a value of type {}", kind)
            }
            StoreError::InvalidKey => "Keys cannot be empty".to_string(),
            StoreError::ConfigError { .. } | StoreError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::HostUnavailable { .. } => {
                "Check that the store directory exists, is writable and holds a valid localstore.json"
            }
            StoreError::QuotaExceeded { .. } => {
                "Remove unused keys, clear the store or raise quota_bytes"
            }
            StoreError::UnsupportedValue { .. } => {
                "Serialize objects to a string before storing them"
            }
            StoreError::InvalidKey => "Pass a non-empty key",
            StoreError::ConfigError { .. } | StoreError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments"
            }
            _ => "Retry the operation or fall back to another storage engine",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
