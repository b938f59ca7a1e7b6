// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function selectors and signatures.

use sha3::{Digest, Keccak256};

use crate::token::ParamType;

/// Keccak-256 digest (the pre-standard variant used by the EVM).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Keccak256::digest(data));
    out
}

/// First four bytes of the Keccak-256 hash of a canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Canonical signature `name(type1,type2,...)`.
pub fn signature(name: &str, inputs: &[ParamType]) -> String {
    let types: Vec<String> = inputs.iter().map(ParamType::canonical).collect();
    format!("{name}({})", types.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn well_known_selectors() {
        assert_eq!(selector("supportsInterface(bytes4)"), [0x01, 0xff, 0xc9, 0xa7]);
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(selector("Error(string)"), [0x08, 0xc3, 0x79, 0xa0]);
    }

    #[test]
    fn signature_uses_canonical_types() {
        let sig = signature(
            "setConfig",
            &[
                ParamType::Address,
                ParamType::Uint(256),
                ParamType::Tuple(vec![ParamType::Array(Box::new(ParamType::String))]),
            ],
        );
        assert_eq!(sig, "setConfig(address,uint256,(string[]))");
    }
}
