//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::network::{AddressFamily, EnumerateOptions, QueryFlags};
use crate::output::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Address family to query
    pub family: AddressFamily,

    /// Query flags passed to the host
    pub flags: QueryFlags,

    /// Size/fetch loop tuning
    pub options: EnumerateOptions,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ family: {}, flags: {} [{}], max_attempts: {}, size_growth: {}x, \
             format: {} }}",
            self.family,
            self.flags,
            self.flags.names().join(", "),
            self.options.max_attempts,
            self.options.size_growth,
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The family or format string is not recognized
    /// - A flag name is not recognized
    /// - `max_attempts` or `size_growth` is zero or above its limit
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let family = Self::resolve_family(cli, toml)?;
        let flags = Self::resolve_flags(cli, toml)?;
        let options = Self::resolve_options(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            family,
            flags,
            options,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_family(cli: &Cli, toml: Option<&TomlConfig>) -> Result<AddressFamily, ConfigError> {
        if let Some(family) = cli.family {
            return Ok(family.into());
        }

        toml.and_then(|t| t.query.family.as_deref())
            .map_or(Ok(defaults::FAMILY), parse_family)
    }

    fn resolve_flags(cli: &Cli, toml: Option<&TomlConfig>) -> Result<QueryFlags, ConfigError> {
        // CLI flags replace the TOML list entirely
        if !cli.flags.is_empty() {
            return parse_flags(&cli.flags);
        }

        match toml.and_then(|t| t.query.flags.as_ref()) {
            Some(names) => parse_flags(names),
            None => Ok(defaults::flags()),
        }
    }

    fn resolve_options(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<EnumerateOptions, ConfigError> {
        let max_attempts = cli
            .max_attempts
            .or_else(|| toml.and_then(|t| t.query.max_attempts))
            .unwrap_or(defaults::MAX_ATTEMPTS);

        if max_attempts == 0 || max_attempts > defaults::MAX_ATTEMPTS_LIMIT {
            return Err(ConfigError::out_of_range(
                field::MAX_ATTEMPTS,
                format!(
                    "{max_attempts} is not between 1 and {}",
                    defaults::MAX_ATTEMPTS_LIMIT
                ),
            ));
        }

        let size_growth = toml
            .and_then(|t| t.query.size_growth)
            .unwrap_or(defaults::SIZE_GROWTH);

        if size_growth == 0 || size_growth > defaults::SIZE_GROWTH_LIMIT {
            return Err(ConfigError::out_of_range(
                field::SIZE_GROWTH,
                format!(
                    "{size_growth} is not between 1 and {}",
                    defaults::SIZE_GROWTH_LIMIT
                ),
            ));
        }

        Ok(EnumerateOptions {
            max_attempts,
            size_growth,
        })
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        toml.and_then(|t| t.output.format.as_deref())
            .map_or(Ok(OutputFormat::default()), parse_format)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_family(s: &str) -> Result<AddressFamily, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(AddressFamily::Ipv4),
        "ipv6" | "v6" | "6" => Ok(AddressFamily::Ipv6),
        "both" | "all" | "unspec" => Ok(AddressFamily::Unspecified),
        _ => Err(ConfigError::InvalidFamily {
            value: s.to_string(),
        }),
    }
}

fn parse_flags<S: AsRef<str>>(names: &[S]) -> Result<QueryFlags, ConfigError> {
    names
        .iter()
        .map(|name| {
            QueryFlags::from_name(name.as_ref()).ok_or_else(|| ConfigError::InvalidFlag {
                value: name.as_ref().to_string(),
            })
        })
        .collect()
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
