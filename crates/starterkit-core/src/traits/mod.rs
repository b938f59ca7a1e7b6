// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component traits of the StarterKit plugin client.
//!
//! The three components the host and the admin UI rely on are expressed as
//! `#[async_trait]` traits so any transport can sit behind them. The
//! transport itself is the [`ContractTransport`] seam.

pub mod gateway;
pub mod metadata;
pub mod probe;
pub mod transport;

pub use gateway::{ConfigGateway, ConfigSlot};
pub use metadata::MetadataProvider;
pub use probe::CapabilityProbe;
pub use transport::ContractTransport;
