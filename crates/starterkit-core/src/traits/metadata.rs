// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin metadata provider trait.

use async_trait::async_trait;

use crate::error::StarterKitError;
use crate::types::{Address, PluginInfo};

/// Exposes the static identification of a deployed plugin.
///
/// Every method is side-effect free and returns a stable value for a given
/// deployed instance, so callers may cache results for a whole session.
/// The only failure mode is the external call being unavailable.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Returns the plugin's descriptive record.
    async fn infos(&self) -> Result<PluginInfo, StarterKitError>;

    /// Returns the module serving the plugin's static content.
    async fn frontend(&self) -> Result<Address, StarterKitError>;

    /// Returns the admin plugin this plugin collaborates with.
    async fn oc_web_admin_plugin(&self) -> Result<Address, StarterKitError>;

    /// Returns the static-frontend plugin this plugin collaborates with.
    async fn static_frontend_plugin(&self) -> Result<Address, StarterKitError>;
}
