//! Core error types for dayboard-core.
//!
//! One umbrella enum plus a per-domain enum for each subsystem, all built
//! on thiserror. Storage recovery paths deliberately swallow `StoreError`
//! (falling back to defaults); everything else propagates with `?`.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persisted-store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// AI collaborator errors
    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Persisted-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),

    /// Blob file exists but could not be read
    #[error("Failed to read blob at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blob file could not be written
    #[error("Failed to write blob at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored bytes are not a valid envelope or payload for the key
    #[error("Corrupt blob for key '{key}': {message}")]
    Corrupt { key: &'static str, message: String },

    /// Envelope version has no upgrade path to the current schema
    #[error("No migration for key '{key}' from version {found} to {expected}")]
    VersionMismatch {
        key: &'static str,
        found: u32,
        expected: u32,
    },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file exists but cannot be parsed
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Config cannot be serialized or written
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Dot-path key does not exist in the config tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed into the key's type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// AI collaborator errors. Callers treat these as "try again" -- they
/// never poison persisted state.
#[derive(Error, Debug)]
pub enum AiError {
    /// No API key in DAYBOARD_AI_KEY or the config file
    #[error("No AI API key configured (set DAYBOARD_AI_KEY or ai.api_key)")]
    MissingApiKey,

    /// Configured endpoint is not a valid URL
    #[error("Invalid AI endpoint: {0}")]
    InvalidEndpoint(String),

    /// Transport-level failure (connect, send, body read)
    #[error("AI request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status from the model endpoint
    #[error("AI endpoint returned HTTP {0}")]
    Status(u16),

    /// Response arrived but did not match the expected shape
    #[error("Malformed AI response: {0}")]
    Malformed(String),

    /// Async runtime could not be created for the blocking client
    #[error("AI runtime error: {0}")]
    Runtime(String),
}

/// Input validation errors, raised at the entity boundary before any
/// engine sees the value.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required text field is empty or whitespace
    #[error("'{field}' must not be empty")]
    EmptyText { field: &'static str },

    /// Numeric field must be strictly positive
    #[error("'{field}' must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    /// Payload is not an image
    #[error("Not an image payload: {mime}")]
    NotAnImage { mime: String },

    /// Image payload exceeds the size cap
    #[error("Image too large: {bytes} bytes (max {max})")]
    ImageTooLarge { bytes: usize, max: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
