// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the StarterKit plugin client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use starterkit_core::{Address, VersionIndex, WebsiteHandle};

/// Top-level StarterKit client configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StarterKitConfig {
    /// Client-wide settings (logging).
    #[serde(default)]
    pub client: ClientConfig,

    /// JSON-RPC node connection settings.
    #[serde(default)]
    pub rpc: RpcConfig,

    /// The deployed StarterKit plugin contract.
    #[serde(default)]
    pub plugin: ContractConfig,

    /// Default website and version targeted by `config get`/`config set`.
    #[serde(default)]
    pub website: WebsiteConfig,

    /// Revert classification keywords.
    #[serde(default)]
    pub errors: ErrorsConfig,
}

/// Client-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// JSON-RPC node connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RpcConfig {
    /// HTTP(S) endpoint of the node or wallet provider.
    #[serde(default = "default_rpc_url")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Sender account for `setConfig` transactions. The node or wallet
    /// behind `url` must be able to sign for it. `None` makes the client
    /// read-only.
    #[serde(default)]
    pub from: Option<Address>,

    /// Delay between transaction receipt polls, in milliseconds.
    #[serde(default = "default_receipt_poll_interval_ms")]
    pub receipt_poll_interval_ms: u64,

    /// Number of receipt polls before a write is reported as unconfirmed.
    #[serde(default = "default_receipt_max_polls")]
    pub receipt_max_polls: u32,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_rpc_url(),
            request_timeout_secs: default_request_timeout_secs(),
            from: None,
            receipt_poll_interval_ms: default_receipt_poll_interval_ms(),
            receipt_max_polls: default_receipt_max_polls(),
        }
    }
}

fn default_rpc_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_receipt_poll_interval_ms() -> u64 {
    1000
}

fn default_receipt_max_polls() -> u32 {
    120
}

/// The deployed plugin contract.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    /// Address of the StarterKit plugin contract.
    #[serde(default)]
    pub address: Option<Address>,
}

/// Default website target.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WebsiteConfig {
    /// Website handle used when `--website` is not given.
    #[serde(default)]
    pub address: Option<WebsiteHandle>,

    /// Version index used when `--version` is not given.
    #[serde(default)]
    pub version: Option<VersionIndex>,
}

/// Keywords that classify contract revert reasons.
///
/// Matching is a case-insensitive substring test. Unauthorized keywords are
/// checked first.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    #[serde(default = "default_not_found_patterns")]
    pub not_found_patterns: Vec<String>,

    #[serde(default = "default_unauthorized_patterns")]
    pub unauthorized_patterns: Vec<String>,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            not_found_patterns: default_not_found_patterns(),
            unauthorized_patterns: default_unauthorized_patterns(),
        }
    }
}

fn default_not_found_patterns() -> Vec<String> {
    [
        "not found",
        "does not exist",
        "out of bounds",
        "invalid version",
        "unknown website",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_unauthorized_patterns() -> Vec<String> {
    [
        "unauthorized",
        "not authorized",
        "not owner",
        "not the owner",
        "only owner",
        "permission",
        "not allowed",
        "locked",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
