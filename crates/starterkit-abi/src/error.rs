// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Codec errors.

use starterkit_core::StarterKitError;
use thiserror::Error;

/// Failure while encoding or decoding ABI data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// A read ran past the end of the buffer.
    #[error("data too short: need {needed} bytes at offset {offset}, have {len}")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// A numeric value does not fit the target type.
    #[error("value out of range for {target}")]
    Overflow { target: &'static str },

    /// Decoding would produce more data than the input holds (aliased offsets).
    #[error("decoded data exceeds the {limit}-byte input")]
    Oversized { limit: usize },

    /// A word is not a valid encoding of its type (dirty padding, bad bool, bad UTF-8).
    #[error("invalid {kind} encoding: {detail}")]
    Invalid { kind: &'static str, detail: String },

    /// Calldata starts with a selector this contract does not define.
    #[error("unknown function selector 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    /// A decoded token does not have the shape the caller asked for.
    #[error("type mismatch: expected {expected}")]
    TypeMismatch { expected: &'static str },
}

impl From<AbiError> for StarterKitError {
    fn from(err: AbiError) -> Self {
        StarterKitError::Abi(err.to_string())
    }
}
