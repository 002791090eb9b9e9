//! Error types for metadata resolution

use thiserror::Error;

/// Result type alias for resolution and emission
pub type GenResult<T> = Result<T, GenError>;

/// Error type for metadata resolution and emission
#[derive(Error, Debug)]
pub enum GenError {
    /// A numeric field type code outside the protocol's closed set
    #[error("unknown field kind: {0}")]
    UnknownFieldKind(i32),

    /// Extension emission was requested for an ordinary field
    #[error("field `{field}` does not extend any message")]
    NotAnExtension { field: String },

    /// A message, group or enum field without its referenced type
    #[error("field `{field}` is missing its {reference} reference")]
    MissingReference { field: String, reference: String },

    /// A template variable was needed but never resolved
    #[error("template variable `{key}` is not set")]
    MissingVariable { key: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for GenError {
    fn from(err: toml::de::Error) -> Self {
        GenError::Config(err.to_string())
    }
}
