// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for StarterKit integration tests.
//!
//! Provides an in-memory plugin contract and a harness that binds the real
//! client to it, for fast, deterministic tests without a node.
//!
//! # Components
//!
//! - [`MockStarterKit`] - In-memory contract speaking the real ABI
//! - [`TestHarness`] - Client wired to a shared mock contract

pub mod harness;
pub mod mock_contract;

pub use harness::{TestHarness, TestHarnessBuilder};
pub use mock_contract::{sample_infos, MockStarterKit, MockStarterKitBuilder};
