//! Centralized error handling for Vitae
//!
//! Runtime features never fail: a missing binding or an unknown navigation target
//! simply disables or ignores the request. Only loading the résumé configuration can
//! fail, and those failures are described here using:
//! - `thiserror` for the typed configuration errors
//! - `anyhow` for application-level propagation with context
//!
//! # Usage
//!
//! ```rust
//! use vitae_core::utils::error::{ResultExt, VitaeResult};
//!
//! fn read(path: &str) -> VitaeResult<String> {
//!     std::fs::read_to_string(path).with_file_context(path)
//! }
//! ```

use thiserror::Error;

/// Errors raised while loading or validating a résumé configuration.
#[derive(Error, Debug)]
pub enum VitaeError {
    /// Generic configuration problem
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration lists no sections at all
    #[error("Configuration error: at least one section is required")]
    EmptySections,

    /// Two sections share the same identifier
    #[error("Configuration error: duplicate section id '{0}'")]
    DuplicateSection(String),

    /// The default section does not name a configured section
    #[error("Configuration error: default section '{0}' is not configured")]
    UnknownDefaultSection(String),

    /// A tuning value that must be positive is not
    #[error("Configuration error: '{field}' must be greater than zero")]
    NonPositive { field: &'static str },

    /// A tuning value is NaN or infinite
    #[error("Configuration error: '{field}' must be a finite number")]
    NonFinite { field: &'static str },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for Vitae operations
pub type VitaeResult<T> = anyhow::Result<T>;

/// Extension trait for adding Vitae-specific context to errors
pub trait ResultExt<T> {
    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> VitaeResult<T>;

    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> VitaeResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> VitaeResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }

    fn with_config_context(self, setting: &str) -> VitaeResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }
}
