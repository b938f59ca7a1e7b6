// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! StarterKit plugin client, revert classification, and interface catalog.
//!
//! The client implements the three components of the plugin interface
//! (metadata provider, configuration gateway, capability probe) over any
//! [`ContractTransport`](starterkit_core::ContractTransport).

pub mod classify;
pub mod client;
pub mod interfaces;

pub use classify::RevertClassifier;
pub use client::StarterKitClient;
pub use interfaces::{known_interfaces, lookup, search_interfaces, KnownInterface};
