//! Core error types for unplug-core.
//!
//! This module defines the error hierarchy using thiserror. Every error here
//! is a caller-contract or environment failure; the dashboard itself has no
//! network or persistence operations that can fail at runtime.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for unplug-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Dashboard state-machine contract violations
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Catalog loading/validation errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

/// Contract violations raised by the dashboard controller.
///
/// These come from a misbehaving frontend (for example a stale id passed to
/// `select` after a shuffle) and are surfaced immediately rather than
/// silently ignored -- silent handling would mask a UI/state
/// desynchronization bug. None of them is transient or retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A mutator was called before `initialize`
    #[error("Dashboard not initialized: call initialize() first")]
    NotInitialized,

    /// `initialize` or `shuffle` was given too few candidate alternatives
    #[error("Insufficient pool size: need at least {required} alternatives, got {actual}")]
    InsufficientPoolSize { required: usize, actual: usize },

    /// `select` was given an id that is not in the displayed subset
    #[error("Unknown alternative '{id}': not in the currently displayed set")]
    UnknownAlternative { id: String },
}

/// Catalog loading/validation errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to load catalog from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse a catalog file
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Two entries share an id
    #[error("Duplicate id '{id}' in catalog")]
    DuplicateId { id: String },

    /// Not enough alternatives to fill the displayed subset
    #[error("Catalog has {actual} alternatives, need at least {required}")]
    PoolTooSmall { required: usize, actual: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown or malformed dot-separated key
    #[error("Invalid configuration key '{key}': {message}")]
    InvalidKey { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
