// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Revert payload decoding.
//!
//! Contracts reject calls with `Error(string)` (from `require`/`revert`),
//! `Panic(uint256)` (compiler-inserted checks) or a custom error.

use std::fmt;

use crate::decode::decode_single;
use crate::encode::encode_call;
use crate::token::{ParamType, Token};

/// Selector of `Error(string)`.
pub const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

/// Selector of `Panic(uint256)`.
pub const PANIC_SELECTOR: [u8; 4] = [0x4e, 0x48, 0x7b, 0x71];

/// Panic code for an out-of-bounds array index.
pub const PANIC_ARRAY_OUT_OF_BOUNDS: u64 = 0x32;

/// A decoded revert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertReason {
    /// The revert carried no data.
    Empty,
    /// `Error(string)` with its message.
    Message(String),
    /// `Panic(uint256)` with its code.
    Panic(u64),
    /// A custom error, identified by its selector.
    Custom { selector: [u8; 4], data: Vec<u8> },
    /// Data that matched a known selector but did not decode.
    Malformed(Vec<u8>),
}

impl RevertReason {
    pub fn decode(data: &[u8]) -> Self {
        if data.is_empty() {
            return RevertReason::Empty;
        }
        if data.len() < 4 {
            return RevertReason::Malformed(data.to_vec());
        }

        let mut selector = [0u8; 4];
        selector.copy_from_slice(&data[..4]);
        let body = &data[4..];

        match selector {
            ERROR_SELECTOR => decode_single(&ParamType::String, body)
                .and_then(Token::into_string)
                .map(RevertReason::Message)
                .unwrap_or_else(|_| RevertReason::Malformed(data.to_vec())),
            PANIC_SELECTOR => decode_single(&ParamType::Uint(256), body)
                .and_then(Token::into_u64)
                .map(RevertReason::Panic)
                .unwrap_or_else(|_| RevertReason::Malformed(data.to_vec())),
            _ => RevertReason::Custom {
                selector,
                data: body.to_vec(),
            },
        }
    }

    /// Encodes an `Error(string)` payload.
    pub fn encode_message(message: &str) -> Vec<u8> {
        encode_call(ERROR_SELECTOR, &[Token::String(message.to_string())])
    }

    /// Encodes a `Panic(uint256)` payload.
    pub fn encode_panic(code: u64) -> Vec<u8> {
        encode_call(PANIC_SELECTOR, &[Token::uint(code)])
    }
}

impl fmt::Display for RevertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevertReason::Empty => write!(f, "no revert data"),
            RevertReason::Message(msg) => write!(f, "{msg}"),
            RevertReason::Panic(code) => match panic_description(*code) {
                Some(desc) => write!(f, "panic code 0x{code:02x} ({desc})"),
                None => write!(f, "panic code 0x{code:02x}"),
            },
            RevertReason::Custom { selector, .. } => {
                write!(f, "custom error 0x{}", hex::encode(selector))
            }
            RevertReason::Malformed(data) => {
                write!(f, "undecodable revert data 0x{}", hex::encode(data))
            }
        }
    }
}

fn panic_description(code: u64) -> Option<&'static str> {
    match code {
        0x01 => Some("assertion failed"),
        0x11 => Some("arithmetic overflow"),
        0x12 => Some("division by zero"),
        0x21 => Some("invalid enum value"),
        0x31 => Some("pop on empty array"),
        0x32 => Some("array index out of bounds"),
        0x41 => Some("out of memory"),
        _ => None,
    }
}
