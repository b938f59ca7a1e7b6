// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde cannot express: endpoint schemes, non-zero
//! timing values, known log levels and non-empty classification keywords.

use crate::diagnostic::ConfigError;
use crate::model::StarterKitConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &StarterKitConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let url = config.rpc.url.trim();
    if url.is_empty() {
        fail("rpc.url must not be empty".to_string());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        fail(format!("rpc.url `{url}` must use http:// or https://"));
    }

    if config.rpc.request_timeout_secs == 0 {
        fail("rpc.request_timeout_secs must be greater than zero".to_string());
    }

    if config.rpc.receipt_poll_interval_ms == 0 {
        fail("rpc.receipt_poll_interval_ms must be greater than zero".to_string());
    }

    if config.rpc.receipt_max_polls == 0 {
        fail("rpc.receipt_max_polls must be at least 1".to_string());
    }

    let level = config.client.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "client.log_level `{}` is not one of {}",
            config.client.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    let lists = [
        ("errors.not_found_patterns", &config.errors.not_found_patterns),
        ("errors.unauthorized_patterns", &config.errors.unauthorized_patterns),
    ];
    for (key, patterns) in lists {
        if patterns.iter().any(|p| p.trim().is_empty()) {
            fail(format!("{key} must not contain empty entries"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &StarterKitConfig) -> Vec<String> {
        match validate_config(config) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&StarterKitConfig::default()).is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = StarterKitConfig::default();
        config.rpc.url = "ws://localhost:8546".to_string();
        let msgs = messages(&config);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].contains("rpc.url"));
    }

    #[test]
    fn rejects_empty_url() {
        let mut config = StarterKitConfig::default();
        config.rpc.url = "  ".to_string();
        assert!(messages(&config)[0].contains("must not be empty"));
    }

    #[test]
    fn collects_every_failure() {
        let mut config = StarterKitConfig::default();
        config.rpc.request_timeout_secs = 0;
        config.rpc.receipt_poll_interval_ms = 0;
        config.rpc.receipt_max_polls = 0;
        config.client.log_level = "loud".to_string();
        config.errors.unauthorized_patterns.push(String::new());
        assert_eq!(messages(&config).len(), 5);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = StarterKitConfig::default();
        config.client.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
