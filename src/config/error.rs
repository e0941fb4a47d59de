//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid address family value.
    #[error("Invalid address family '{value}': expected ipv4, ipv6, or both")]
    InvalidFamily {
        /// The invalid value provided
        value: String,
    },

    /// Unknown query flag name.
    #[error("Invalid query flag '{value}': expected a name like skip-anycast")]
    InvalidFlag {
        /// The invalid flag name
        value: String,
    },

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected text or json")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },

    /// Numeric option out of range.
    #[error("Invalid value for {field}: {reason}")]
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `OutOfRange` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The fetch attempt bound.
    pub const MAX_ATTEMPTS: &str = "max_attempts";
    /// The buffer growth factor.
    pub const SIZE_GROWTH: &str = "size_growth";
}

impl ConfigError {
    /// Creates an `OutOfRange` error for a numeric field.
    #[must_use]
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }
}
