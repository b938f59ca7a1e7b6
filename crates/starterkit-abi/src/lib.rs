// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract ABI codec for the StarterKit plugin client.
//!
//! Implements the subset of the Solidity contract ABI the plugin interface
//! uses (addresses, unsigned integers, booleans, `bytesN`, strings, dynamic
//! arrays and tuples), revert payload decoding, and the typed encoders and
//! decoders for every function of the StarterKit contract.

pub mod contract;
pub mod decode;
pub mod encode;
pub mod error;
pub mod revert;
pub mod selector;
pub mod token;

pub use contract::{StarterKitCall, StarterKitFunction};
pub use decode::{decode, decode_single};
pub use encode::{encode, encode_call};
pub use error::AbiError;
pub use revert::RevertReason;
pub use selector::{keccak256, selector};
pub use token::{ParamType, Token};
