// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of transport failures and contract reverts onto the error taxonomy.

use starterkit_abi::revert::PANIC_ARRAY_OUT_OF_BOUNDS;
use starterkit_abi::RevertReason;
use starterkit_config::ErrorsConfig;
use starterkit_core::{StarterKitError, TransportError};

/// Classifies revert reasons by case-insensitive keyword match.
///
/// Unauthorized keywords are checked before not-found keywords. A reason
/// matching neither list becomes [`StarterKitError::Rejected`].
#[derive(Debug, Clone)]
pub struct RevertClassifier {
    unauthorized: Vec<String>,
    not_found: Vec<String>,
}

impl Default for RevertClassifier {
    fn default() -> Self {
        Self::new(&ErrorsConfig::default())
    }
}

impl RevertClassifier {
    pub fn new(config: &ErrorsConfig) -> Self {
        let lower = |patterns: &[String]| -> Vec<String> {
            patterns
                .iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect()
        };
        Self {
            unauthorized: lower(&config.unauthorized_patterns),
            not_found: lower(&config.not_found_patterns),
        }
    }

    /// Maps a transport failure into the domain taxonomy.
    pub fn classify(&self, error: TransportError) -> StarterKitError {
        match error {
            TransportError::Unavailable { message, source } => {
                StarterKitError::Transport { message, source }
            }
            TransportError::Reverted { data, message } => {
                self.classify_revert(&data, message.as_deref())
            }
            TransportError::Unsupported(message) => StarterKitError::Config(message),
        }
    }

    /// Classifies a raw revert payload. `node_message` is used when the
    /// payload itself carries no reason.
    pub fn classify_revert(&self, data: &[u8], node_message: Option<&str>) -> StarterKitError {
        let decoded = RevertReason::decode(data);

        let reason = match &decoded {
            RevertReason::Panic(PANIC_ARRAY_OUT_OF_BOUNDS) => {
                return StarterKitError::NotFound {
                    reason: decoded.to_string(),
                };
            }
            RevertReason::Message(msg) => msg.clone(),
            RevertReason::Empty | RevertReason::Malformed(_) => node_message
                .map(str::to_string)
                .unwrap_or_else(|| decoded.to_string()),
            RevertReason::Panic(_) | RevertReason::Custom { .. } => decoded.to_string(),
        };

        self.classify_reason(reason)
    }

    /// Classifies a human-readable reason.
    pub fn classify_reason(&self, reason: String) -> StarterKitError {
        let haystack = reason.to_lowercase();
        let matches = |patterns: &[String]| patterns.iter().any(|p| haystack.contains(p.as_str()));

        if matches(&self.unauthorized) {
            StarterKitError::Unauthorized { reason }
        } else if matches(&self.not_found) {
            StarterKitError::NotFound { reason }
        } else {
            StarterKitError::Rejected { reason }
        }
    }
}
