//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.query.family.is_none());
        assert!(config.query.flags.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_full_query_section() {
        let toml = r#"
            [query]
            family = "ipv6"
            flags = ["include-prefix", "include-gateways"]
            max_attempts = 5
            size_growth = 3
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let query = &config.query;

        assert_eq!(query.family.as_deref(), Some("ipv6"));
        assert_eq!(
            query.flags.as_deref(),
            Some(&["include-prefix".to_string(), "include-gateways".to_string()][..])
        );
        assert_eq!(query.max_attempts, Some(5));
        assert_eq!(query.size_growth, Some(3));
    }

    #[test]
    fn parse_explicit_empty_flags() {
        let config = TomlConfig::parse("[query]\nflags = []\n").unwrap();
        assert_eq!(config.query.flags, Some(vec![]));
    }

    #[test]
    fn parse_output_section() {
        let config = TomlConfig::parse("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }
}

mod errors {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[monitor]\npoll_interval = 60\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = TomlConfig::parse("[query]\nfamliy = \"ipv4\"\n");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[query]\nmax_attempts = \"three\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::load(&dir.path().join("missing.toml"));

        let error = result.unwrap_err();
        assert!(matches!(error, ConfigError::FileRead { .. }));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(
            config.query.flags,
            Some(vec![
                "skip-anycast".to_string(),
                "skip-multicast".to_string(),
                "skip-dns-server".to_string(),
            ])
        );
    }

    #[test]
    fn template_flags_match_defaults() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();
        let names = config.query.flags.unwrap();

        assert_eq!(names, crate::config::defaults::flags().names());
    }
}
