// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-RPC 2.0 envelope types and the Ethereum call/receipt objects.

use serde::{Deserialize, Serialize};
use starterkit_core::Address;

// --- Envelope ---

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: serde_json::Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response. Exactly one of `result` and `error` is set by
/// well-behaved nodes; `result` may legitimately be `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// JSON-RPC error code Geth-style nodes use for `execution reverted`.
pub const EXECUTION_REVERTED_CODE: i64 = 3;

impl RpcErrorObject {
    /// Whether this error reports a contract revert rather than a node fault.
    pub fn is_revert(&self) -> bool {
        self.code == EXECUTION_REVERTED_CODE || self.message.to_lowercase().contains("revert")
    }

    /// Raw revert payload carried in `data`, if any.
    ///
    /// Nodes disagree on the shape: most send a hex string, some nest it
    /// under `data.data`.
    pub fn revert_data(&self) -> Vec<u8> {
        let hex_str = match &self.data {
            Some(serde_json::Value::String(s)) => Some(s.as_str()),
            Some(serde_json::Value::Object(map)) => map.get("data").and_then(|v| v.as_str()),
            _ => None,
        };
        hex_str.and_then(|s| decode_hex(s).ok()).unwrap_or_default()
    }
}

// --- Ethereum objects ---

/// Transaction object shared by `eth_call` and `eth_sendTransaction`.
#[derive(Debug, Clone, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: String,
}

impl CallRequest {
    pub fn new(from: Option<Address>, to: Address, calldata: &[u8]) -> Self {
        Self {
            from,
            to,
            data: encode_hex(calldata),
        }
    }
}

/// The parts of a transaction receipt the client looks at.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// `0x1` on success, `0x0` on revert. Absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Whether the receipt records a successful execution.
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(s) => s.trim_start_matches("0x").trim_start_matches('0') == "1",
            None => true,
        }
    }
}

/// `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes hex with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits)
}
