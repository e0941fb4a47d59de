//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::network::AddressFamily;
use crate::output::OutputFormat;

/// net-adapters: Windows network adapter enumeration
///
/// Lists the host's network adapters with their identifier, interface
/// name and display alias.
#[derive(Debug, Parser)]
#[command(name = "net-adapters")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Address family to query
    #[arg(long, value_enum)]
    pub family: Option<FamilyArg>,

    /// Query flag such as skip-anycast or include-gateways (can be specified multiple times)
    #[arg(long = "flag", value_name = "FLAG")]
    pub flags: Vec<String>,

    /// Maximum number of fetch attempts when the adapter table grows
    #[arg(long = "max-attempts")]
    pub max_attempts: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for net-adapters
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "net-adapters.toml")]
        output: PathBuf,
    },
}

/// Address family argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FamilyArg {
    /// IPv4 adapters only
    #[value(name = "ipv4")]
    V4,
    /// IPv6 adapters only
    #[value(name = "ipv6")]
    V6,
    /// Both IPv4 and IPv6 adapters
    #[value(name = "both")]
    Both,
}

impl From<FamilyArg> for AddressFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::V4 => Self::Ipv4,
            FamilyArg::V6 => Self::Ipv6,
            FamilyArg::Both => Self::Unspecified,
        }
    }
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One adapter per line
    Text,
    /// JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
