// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strict ABI decoding.
//!
//! Every offset and length is bounds-checked against the buffer, and padding
//! bits must be zero, so a malicious or broken node cannot make the decoder
//! panic. Offsets may legally alias, so decoded output is also charged
//! against a budget equal to the input length: a canonical encoding spends
//! at most one input byte per output byte, and aliased tails run out.

use starterkit_core::Address;

use crate::error::AbiError;
use crate::token::{word_to_u64, ParamType, Token, Word, WORD_SIZE};

/// Decodes a parameter list of the given types.
pub fn decode(types: &[ParamType], data: &[u8]) -> Result<Vec<Token>, AbiError> {
    Decoder::new(data).sequence(types.iter(), 0)
}

/// Decodes a single value that was encoded as a one-element parameter list.
pub fn decode_single(ty: &ParamType, data: &[u8]) -> Result<Token, AbiError> {
    let mut tokens = decode(std::slice::from_ref(ty), data)?;
    tokens
        .pop()
        .ok_or(AbiError::TypeMismatch { expected: "one value" })
}

struct Decoder<'a> {
    data: &'a [u8],
    budget: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            budget: data.len(),
        }
    }

    /// Charges `bytes` of decoded output against the input size.
    fn charge(&mut self, bytes: usize) -> Result<(), AbiError> {
        self.budget = self.budget.checked_sub(bytes).ok_or(AbiError::Oversized {
            limit: self.data.len(),
        })?;
        Ok(())
    }

    fn sequence<'t, I>(&mut self, types: I, base: usize) -> Result<Vec<Token>, AbiError>
    where
        I: IntoIterator<Item = &'t ParamType>,
    {
        let mut tokens = Vec::new();
        let mut head = base;

        for ty in types {
            let token = if ty.is_dynamic() {
                let relative = read_usize(self.data, head)?;
                let target = base.checked_add(relative).ok_or(AbiError::Overflow {
                    target: "offset",
                })?;
                self.value(ty, target)?
            } else {
                self.value(ty, head)?
            };
            tokens.push(token);
            head += ty.head_size();
        }

        Ok(tokens)
    }

    fn value(&mut self, ty: &ParamType, offset: usize) -> Result<Token, AbiError> {
        let data = self.data;
        match ty {
            ParamType::Address => {
                self.charge(WORD_SIZE)?;
                let word = read_word(data, offset)?;
                if word[..12].iter().any(|&b| b != 0) {
                    return Err(AbiError::Invalid {
                        kind: "address",
                        detail: "non-zero padding".to_string(),
                    });
                }
                let mut addr = [0u8; 20];
                addr.copy_from_slice(&word[12..]);
                Ok(Token::Address(Address(addr)))
            }
            ParamType::Uint(bits) => {
                self.charge(WORD_SIZE)?;
                let word = read_word(data, offset)?;
                let used = bits.div_ceil(8).min(WORD_SIZE);
                if word[..WORD_SIZE - used].iter().any(|&b| b != 0) {
                    return Err(AbiError::Invalid {
                        kind: "uint",
                        detail: format!("value exceeds {bits} bits"),
                    });
                }
                Ok(Token::Uint(word))
            }
            ParamType::Bool => {
                self.charge(WORD_SIZE)?;
                let word = read_word(data, offset)?;
                match word_to_u64(&word) {
                    Ok(0) => Ok(Token::Bool(false)),
                    Ok(1) => Ok(Token::Bool(true)),
                    _ => Err(AbiError::Invalid {
                        kind: "bool",
                        detail: format!("word 0x{}", hex::encode(word)),
                    }),
                }
            }
            ParamType::FixedBytes(len) => {
                self.charge(WORD_SIZE)?;
                let word = read_word(data, offset)?;
                let len = (*len).min(WORD_SIZE);
                if word[len..].iter().any(|&b| b != 0) {
                    return Err(AbiError::Invalid {
                        kind: "bytesN",
                        detail: "non-zero padding".to_string(),
                    });
                }
                Ok(Token::FixedBytes(word[..len].to_vec()))
            }
            ParamType::String => {
                let len = read_usize(data, offset)?;
                let padded = len
                    .div_ceil(WORD_SIZE)
                    .checked_mul(WORD_SIZE)
                    .ok_or(AbiError::Overflow { target: "string length" })?;
                let start = offset + WORD_SIZE;
                let body = read_slice(data, start, padded)?;
                self.charge(WORD_SIZE + padded)?;
                let (bytes, padding) = body.split_at(len);
                if padding.iter().any(|&b| b != 0) {
                    return Err(AbiError::Invalid {
                        kind: "string",
                        detail: "non-zero padding".to_string(),
                    });
                }
                let s = std::str::from_utf8(bytes).map_err(|e| AbiError::Invalid {
                    kind: "string",
                    detail: e.to_string(),
                })?;
                Ok(Token::String(s.to_string()))
            }
            ParamType::Array(inner) => {
                let len = read_usize(data, offset)?;
                let start = offset + WORD_SIZE;
                // Every element owns at least one head word.
                let min_bytes = len.checked_mul(WORD_SIZE).ok_or(AbiError::Overflow {
                    target: "array length",
                })?;
                read_slice(data, start, min_bytes)?;
                self.charge(WORD_SIZE)?;
                let items = self.sequence(std::iter::repeat_n(inner.as_ref(), len), start)?;
                Ok(Token::Array(items))
            }
            ParamType::Tuple(items) => Ok(Token::Tuple(self.sequence(items, offset)?)),
        }
    }
}

fn read_slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], AbiError> {
    let end = offset.checked_add(len).ok_or(AbiError::Overflow { target: "offset" })?;
    data.get(offset..end).ok_or(AbiError::OutOfBounds {
        offset,
        needed: len,
        len: data.len(),
    })
}

fn read_word(data: &[u8], offset: usize) -> Result<Word, AbiError> {
    let slice = read_slice(data, offset, WORD_SIZE)?;
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(slice);
    Ok(word)
}

fn read_usize(data: &[u8], offset: usize) -> Result<usize, AbiError> {
    let value = word_to_u64(&read_word(data, offset)?)?;
    usize::try_from(value).map_err(|_| AbiError::Overflow { target: "usize" })
}
