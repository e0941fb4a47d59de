//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Adapter query configuration section
    #[serde(default)]
    pub query: QuerySection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Adapter query configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuerySection {
    /// Address family: "ipv4", "ipv6", or "both"
    pub family: Option<String>,

    /// Query flag names. An explicit empty list means no flags.
    pub flags: Option<Vec<String>>,

    /// Maximum number of fetch attempts
    pub max_attempts: Option<u32>,

    /// Buffer growth factor applied to the probed size
    pub size_growth: Option<usize>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# net-adapters Configuration File

[query]
# Address family to query (default: both)
# Accepted values: "ipv4"/"v4"/"4", "ipv6"/"v6"/"6", or "both"/"all"/"unspec"
# family = "both"

# Query flags passed to GetAdaptersAddresses
# Note: CLI --flag values REPLACE this list entirely (not merged)
# Known flags: skip-unicast, skip-anycast, skip-multicast, skip-dns-server,
#   include-prefix, skip-friendly-name, include-wins-info, include-gateways,
#   include-all-interfaces, include-all-compartments, include-tunnel-bindingorder
flags = ["skip-anycast", "skip-multicast", "skip-dns-server"]

# Maximum number of fetches when the adapter table grows mid-query (default: 3)
# max_attempts = 3

# Buffer growth factor applied to the probed size (default: 2)
# size_growth = 2

[output]
# Output format: "text" or "json" (default: text)
# format = "text"
"#
    .to_string()
}
