// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability probe trait.

use async_trait::async_trait;

use crate::error::StarterKitError;
use crate::types::InterfaceId;

/// Answers whether the plugin implements a given interface identifier.
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    async fn supports_interface(&self, interface_id: InterfaceId) -> Result<bool, StarterKitError>;
}
