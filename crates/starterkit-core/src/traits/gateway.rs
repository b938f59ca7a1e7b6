// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration gateway trait and the per-pair capability handle.

use async_trait::async_trait;

use crate::error::StarterKitError;
use crate::types::{PluginConfig, VersionIndex, WebsiteHandle};

/// Reads and writes the plugin configuration of one website version.
///
/// No local validation of the `(website, version)` pair is performed: the
/// external store decides whether the pair exists and whether the caller may
/// write it. Writes replace the whole record; concurrent writers race and
/// the last commit accepted by the store wins.
#[async_trait]
pub trait ConfigGateway: Send + Sync {
    /// Returns the persisted configuration, or the store's default if it was
    /// never written.
    async fn get_config(
        &self,
        website: &WebsiteHandle,
        version: VersionIndex,
    ) -> Result<PluginConfig, StarterKitError>;

    /// Replaces the configuration of the pair.
    async fn set_config(
        &self,
        website: &WebsiteHandle,
        version: VersionIndex,
        config: &PluginConfig,
    ) -> Result<(), StarterKitError>;

    /// Binds this gateway to one pair.
    fn slot(&self, website: WebsiteHandle, version: VersionIndex) -> ConfigSlot<'_, Self>
    where
        Self: Sized,
    {
        ConfigSlot::new(self, website, version)
    }
}

/// A `read`/`write` handle scoped to exactly one `(website, version)` pair.
#[derive(Debug)]
pub struct ConfigSlot<'a, G: ?Sized> {
    gateway: &'a G,
    website: WebsiteHandle,
    version: VersionIndex,
}

impl<G: ?Sized> Clone for ConfigSlot<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for ConfigSlot<'_, G> {}

impl<'a, G: ConfigGateway + ?Sized> ConfigSlot<'a, G> {
    pub fn new(gateway: &'a G, website: WebsiteHandle, version: VersionIndex) -> Self {
        Self {
            gateway,
            website,
            version,
        }
    }

    pub fn website(&self) -> &WebsiteHandle {
        &self.website
    }

    pub fn version(&self) -> VersionIndex {
        self.version
    }

    /// Fetches the current configuration of this pair.
    pub async fn read(&self) -> Result<PluginConfig, StarterKitError> {
        self.gateway.get_config(&self.website, self.version).await
    }

    /// Replaces the configuration of this pair.
    pub async fn write(&self, config: &PluginConfig) -> Result<(), StarterKitError> {
        self.gateway
            .set_config(&self.website, self.version, config)
            .await
    }
}
