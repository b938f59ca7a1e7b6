// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ABI parameter types and decoded values.

use starterkit_core::Address;

use crate::error::AbiError;

/// One 32-byte ABI word.
pub type Word = [u8; 32];

/// Size of an ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// The subset of Solidity types this codec understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Address,
    /// `uintN`, with N in bits.
    Uint(usize),
    Bool,
    /// `bytesN`, with N in bytes (1..=32).
    FixedBytes(usize),
    String,
    /// Dynamic-length array `T[]`.
    Array(Box<ParamType>),
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Whether values of this type are encoded out-of-line behind an offset.
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::String | ParamType::Array(_) => true,
            ParamType::Tuple(items) => items.iter().any(ParamType::is_dynamic),
            _ => false,
        }
    }

    /// Bytes this type occupies in the head of an enclosing tuple.
    pub fn head_size(&self) -> usize {
        match self {
            ParamType::Tuple(items) if !self.is_dynamic() => {
                items.iter().map(ParamType::head_size).sum()
            }
            _ => WORD_SIZE,
        }
    }

    /// Canonical type name as used in function signatures.
    pub fn canonical(&self) -> String {
        match self {
            ParamType::Address => "address".to_string(),
            ParamType::Uint(bits) => format!("uint{bits}"),
            ParamType::Bool => "bool".to_string(),
            ParamType::FixedBytes(len) => format!("bytes{len}"),
            ParamType::String => "string".to_string(),
            ParamType::Array(inner) => format!("{}[]", inner.canonical()),
            ParamType::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(ParamType::canonical).collect();
                format!("({})", inner.join(","))
            }
        }
    }
}

/// A decoded (or to-be-encoded) ABI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Address(Address),
    Uint(Word),
    Bool(bool),
    FixedBytes(Vec<u8>),
    String(String),
    Array(Vec<Token>),
    Tuple(Vec<Token>),
}

impl Token {
    /// A `uint` token holding a `u64`.
    pub fn uint(value: u64) -> Self {
        Token::Uint(u64_word(value))
    }

    pub fn is_dynamic(&self) -> bool {
        match self {
            Token::String(_) | Token::Array(_) => true,
            Token::Tuple(items) => items.iter().any(Token::is_dynamic),
            _ => false,
        }
    }

    pub fn into_address(self) -> Result<Address, AbiError> {
        match self {
            Token::Address(a) => Ok(a),
            _ => Err(AbiError::TypeMismatch { expected: "address" }),
        }
    }

    pub fn into_bool(self) -> Result<bool, AbiError> {
        match self {
            Token::Bool(b) => Ok(b),
            _ => Err(AbiError::TypeMismatch { expected: "bool" }),
        }
    }

    pub fn into_string(self) -> Result<String, AbiError> {
        match self {
            Token::String(s) => Ok(s),
            _ => Err(AbiError::TypeMismatch { expected: "string" }),
        }
    }

    pub fn into_u64(self) -> Result<u64, AbiError> {
        match self {
            Token::Uint(word) => word_to_u64(&word),
            _ => Err(AbiError::TypeMismatch { expected: "uint" }),
        }
    }

    pub fn into_fixed_bytes(self) -> Result<Vec<u8>, AbiError> {
        match self {
            Token::FixedBytes(b) => Ok(b),
            _ => Err(AbiError::TypeMismatch { expected: "bytesN" }),
        }
    }

    pub fn into_array(self) -> Result<Vec<Token>, AbiError> {
        match self {
            Token::Array(items) => Ok(items),
            _ => Err(AbiError::TypeMismatch { expected: "array" }),
        }
    }

    pub fn into_tuple(self) -> Result<Vec<Token>, AbiError> {
        match self {
            Token::Tuple(items) => Ok(items),
            _ => Err(AbiError::TypeMismatch { expected: "tuple" }),
        }
    }
}

/// Big-endian word holding `value`.
pub fn u64_word(value: u64) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Reads a word as `u64`, rejecting values that need more than 64 bits.
pub fn word_to_u64(word: &Word) -> Result<u64, AbiError> {
    if word[..24].iter().any(|&b| b != 0) {
        return Err(AbiError::Overflow { target: "u64" });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(buf))
}
