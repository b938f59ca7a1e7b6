// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy (`./starterkit.toml` over
//! `~/.config/starterkit/starterkit.toml` over `/etc/starterkit/starterkit.toml`)
//! with environment variable overrides via the `STARTERKIT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::StarterKitConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/starterkit/starterkit.toml";

/// Local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "starterkit.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/starterkit/starterkit.toml` (system-wide)
/// 3. `~/.config/starterkit/starterkit.toml` (user XDG config)
/// 4. `./starterkit.toml` (local directory)
/// 5. `STARTERKIT_*` environment variables
pub fn load_config() -> Result<StarterKitConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<StarterKitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StarterKitConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<StarterKitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StarterKitConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Path of the per-user configuration file, if a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("starterkit").join(LOCAL_CONFIG_FILE))
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(StarterKitConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `STARTERKIT_RPC_RECEIPT_MAX_POLLS` must map to
/// `rpc.receipt_max_polls`, not `rpc.receipt.max.polls`.
fn env_provider() -> Env {
    Env::prefixed("STARTERKIT_").map(|key| {
        // `key` keeps the variable's original case once the prefix is stripped.
        map_env_key(&key.as_str().to_ascii_lowercase()).into()
    })
}

/// Maps a lowercased, prefix-stripped env var name to a dotted config path.
pub fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 5] = ["client", "rpc", "plugin", "website", "errors"];
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("rpc_url"), "rpc.url");
        assert_eq!(map_env_key("rpc_receipt_max_polls"), "rpc.receipt_max_polls");
        assert_eq!(map_env_key("plugin_address"), "plugin.address");
        assert_eq!(map_env_key("client_log_level"), "client.log_level");
        assert_eq!(map_env_key("errors_not_found_patterns"), "errors.not_found_patterns");
        assert_eq!(map_env_key("unrelated"), "unrelated");
    }

    #[test]
    fn uppercase_env_vars_reach_their_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STARTERKIT_RPC_URL", "http://env-node:8545");
            jail.set_env("STARTERKIT_WEBSITE_VERSION", "4");
            jail.create_file("starterkit.toml", "")?;
            let config = load_config_from_path(Path::new("starterkit.toml"))?;
            assert_eq!(config.rpc.url, "http://env-node:8545");
            assert_eq!(config.website.version.map(|v| v.as_u64()), Some(4));
            Ok(())
        });
    }
}
