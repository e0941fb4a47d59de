//! Tests for validated configuration.

use crate::network::{AddressFamily, EnumerateOptions, QueryFlags};
use crate::output::OutputFormat;

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["net-adapters"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod defaults_applied {
    use super::*;

    #[test]
    fn no_sources_uses_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

        assert_eq!(config.family, AddressFamily::Unspecified);
        assert_eq!(config.flags, defaults::flags());
        assert_eq!(config.options, EnumerateOptions::default());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml(""))).unwrap();

        assert_eq!(config.flags, defaults::flags());
        assert_eq!(config.options.max_attempts, defaults::MAX_ATTEMPTS);
        assert_eq!(config.options.size_growth, defaults::SIZE_GROWTH);
    }

    #[test]
    fn verbose_comes_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--verbose"]), None).unwrap();
        assert!(config.verbose);
    }
}

mod precedence {
    use super::*;

    #[test]
    fn cli_family_overrides_toml() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--family", "ipv4"]),
            Some(&toml("[query]\nfamily = \"ipv6\"\n")),
        )
        .unwrap();

        assert_eq!(config.family, AddressFamily::Ipv4);
    }

    #[test]
    fn toml_family_used_without_cli() {
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[query]\nfamily = \"v6\"\n")))
                .unwrap();

        assert_eq!(config.family, AddressFamily::Ipv6);
    }

    #[test]
    fn cli_flags_replace_toml_flags() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--flag", "include-gateways"]),
            Some(&toml("[query]\nflags = [\"skip-unicast\", \"include-prefix\"]\n")),
        )
        .unwrap();

        assert_eq!(config.flags, QueryFlags::INCLUDE_GATEWAYS);
    }

    #[test]
    fn toml_flags_used_without_cli() {
        let config = ValidatedConfig::from_raw(
            &cli(&[]),
            Some(&toml("[query]\nflags = [\"skip-unicast\", \"include-prefix\"]\n")),
        )
        .unwrap();

        assert_eq!(
            config.flags,
            QueryFlags::SKIP_UNICAST | QueryFlags::INCLUDE_PREFIX
        );
    }

    #[test]
    fn explicit_empty_toml_flags_means_none() {
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[query]\nflags = []\n"))).unwrap();

        assert!(config.flags.is_empty());
    }

    #[test]
    fn cli_max_attempts_overrides_toml() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--max-attempts", "7"]),
            Some(&toml("[query]\nmax_attempts = 2\n")),
        )
        .unwrap();

        assert_eq!(config.options.max_attempts, 7);
    }

    #[test]
    fn size_growth_from_toml() {
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[query]\nsize_growth = 4\n")))
                .unwrap();

        assert_eq!(config.options.size_growth, 4);
    }

    #[test]
    fn cli_format_overrides_toml() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--format", "json"]),
            Some(&toml("[output]\nformat = \"text\"\n")),
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn toml_format_is_case_insensitive() {
        let config =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[output]\nformat = \"JSON\"\n")))
                .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
    }
}

mod validation {
    use super::*;

    #[test]
    fn unknown_toml_family_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[query]\nfamily = \"ipx\"\n")));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidFamily { ref value }) if value == "ipx"
        ));
    }

    #[test]
    fn unknown_cli_flag_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--flag", "skip-everything"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidFlag { ref value }) if value == "skip-everything"
        ));
    }

    #[test]
    fn unknown_toml_format_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[output]\nformat = \"xml\"\n")));

        assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    }

    #[test]
    fn zero_max_attempts_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--max-attempts", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange {
                field: "max_attempts",
                ..
            })
        ));
    }

    #[test]
    fn excessive_max_attempts_is_rejected() {
        let result = ValidatedConfig::from_raw(
            &cli(&[]),
            Some(&toml("[query]\nmax_attempts = 1000\n")),
        );

        assert!(matches!(result, Err(ConfigError::OutOfRange { .. })));
    }

    #[test]
    fn zero_size_growth_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[query]\nsize_growth = 0\n")));

        assert!(matches!(
            result,
            Err(ConfigError::OutOfRange {
                field: "size_growth",
                ..
            })
        ));
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net-adapters.toml");
        std::fs::write(&path, "[query]\nfamily = \"ipv4\"\n").unwrap();

        let config = ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap()])).unwrap();

        assert_eq!(config.family, AddressFamily::Ipv4);
    }

    #[test]
    fn load_without_config_file_uses_cli() {
        let config = ValidatedConfig::load(&cli(&["--family", "ipv6"])).unwrap();
        assert_eq!(config.family, AddressFamily::Ipv6);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap()]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn written_template_loads_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated.toml");
        write_default_config(&path).unwrap();

        let config = ValidatedConfig::load(&cli(&["-c", path.to_str().unwrap()])).unwrap();

        assert_eq!(config, ValidatedConfig::from_raw(&cli(&[]), None).unwrap());
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_lists_flag_names() {
        let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();
        let text = config.to_string();

        assert!(text.contains("skip-anycast"));
        assert!(text.contains("max_attempts: 3"));
        assert!(text.contains("format: text"));
    }
}
