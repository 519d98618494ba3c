// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for logging configuration.

#[cfg(test)]
mod tests {
    use crate::config::*;
    use clap::ValueEnum;

    #[test]
    fn test_log_format_values() {
        assert_eq!(LogFormat::default(), LogFormat::Text);
        assert_eq!(LogFormat::from_str("json", true), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_str("TEXT", true), Ok(LogFormat::Text));
        assert!(LogFormat::from_str("xml", true).is_err());
    }

    #[test]
    fn test_explicit_level_is_validated() {
        let valid = LoggingConfig {
            format: LogFormat::Json,
            level: Some("debug,kube=warn".to_string()),
        };
        assert!(valid.env_filter().is_ok());

        let invalid = LoggingConfig {
            format: LogFormat::Text,
            level: Some("crd_provider=verbose".to_string()),
        };
        let err = invalid.env_filter().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_default_config_builds_filter() {
        assert!(LoggingConfig::default().env_filter().is_ok());
    }
}
