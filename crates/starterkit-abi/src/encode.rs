// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Head/tail ABI encoding.
//!
//! A parameter list is encoded as a tuple: static members sit inline in the
//! head, dynamic members leave a 32-byte offset in the head (relative to the
//! start of the tuple) and their body in the tail, in declaration order.

use crate::token::{u64_word, Token, WORD_SIZE};

/// Encodes a parameter list (the argument or return tuple of a function).
pub fn encode(tokens: &[Token]) -> Vec<u8> {
    encode_sequence(tokens)
}

/// Encodes a function call: 4-byte selector followed by the encoded arguments.
pub fn encode_call(selector: [u8; 4], tokens: &[Token]) -> Vec<u8> {
    let body = encode(tokens);
    let mut out = Vec::with_capacity(4 + body.len());
    out.extend_from_slice(&selector);
    out.extend_from_slice(&body);
    out
}

fn encode_sequence(tokens: &[Token]) -> Vec<u8> {
    let head_len: usize = tokens.iter().map(head_size).sum();
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for token in tokens {
        if token.is_dynamic() {
            head.extend_from_slice(&usize_word(head_len + tail.len()));
            tail.extend(encode_token(token));
        } else {
            head.extend(encode_token(token));
        }
    }

    head.extend(tail);
    head
}

fn encode_token(token: &Token) -> Vec<u8> {
    match token {
        Token::Address(addr) => {
            let mut word = [0u8; WORD_SIZE];
            word[12..].copy_from_slice(addr.as_bytes());
            word.to_vec()
        }
        Token::Uint(word) => word.to_vec(),
        Token::Bool(b) => u64_word(u64::from(*b)).to_vec(),
        Token::FixedBytes(bytes) => {
            let mut word = [0u8; WORD_SIZE];
            let len = bytes.len().min(WORD_SIZE);
            word[..len].copy_from_slice(&bytes[..len]);
            word.to_vec()
        }
        Token::String(s) => encode_bytes(s.as_bytes()),
        Token::Array(items) => {
            let mut out = usize_word(items.len()).to_vec();
            out.extend(encode_sequence(items));
            out
        }
        Token::Tuple(items) => encode_sequence(items),
    }
}

/// Length word followed by the bytes, right-padded to a word boundary.
fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
    let padded = bytes.len().div_ceil(WORD_SIZE) * WORD_SIZE;
    let mut out = Vec::with_capacity(WORD_SIZE + padded);
    out.extend_from_slice(&usize_word(bytes.len()));
    out.extend_from_slice(bytes);
    out.resize(WORD_SIZE + padded, 0);
    out
}

fn head_size(token: &Token) -> usize {
    match token {
        Token::Tuple(items) if !token.is_dynamic() => items.iter().map(head_size).sum(),
        _ => WORD_SIZE,
    }
}

fn usize_word(value: usize) -> [u8; WORD_SIZE] {
    u64_word(value as u64)
}
