// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for an Ethereum JSON-RPC endpoint.
//!
//! Provides [`RpcClient`] which handles request framing, id allocation and
//! mapping node errors into [`TransportError`]. It never retries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::{json, Value};
use starterkit_core::{StarterKitError, TransportError};
use tracing::{debug, warn};

use crate::types::{decode_hex, CallRequest, RpcErrorObject, RpcRequest, RpcResponse, TransactionReceipt};

/// Block tag used for every read.
const LATEST: &str = "latest";

/// HTTP client for JSON-RPC communication.
#[derive(Debug)]
pub struct RpcClient {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a client for `url` with a per-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, StarterKitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StarterKitError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// The endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one JSON-RPC request and returns its `result` member.
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest::new(id, method, params);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Unavailable {
                message: format!("HTTP request to {} failed: {e}", self.url),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(method, id, status = %status, "json-rpc response received");

        let text = response.text().await.map_err(|e| TransportError::Unavailable {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        // Some nodes report reverts with a non-2xx status and a valid error body.
        let parsed = serde_json::from_str::<RpcResponse>(&text);
        if !status.is_success() {
            if let Ok(RpcResponse {
                error: Some(error), ..
            }) = parsed
            {
                return Err(map_rpc_error(method, error));
            }
            warn!(method, status = %status, "node returned an HTTP error");
            return Err(TransportError::unavailable(format!(
                "node returned {status}: {}",
                truncate(&text)
            )));
        }

        let parsed = parsed.map_err(|e| TransportError::Unavailable {
            message: format!("failed to parse {method} response: {e}"),
            source: Some(Box::new(e)),
        })?;

        match parsed {
            RpcResponse {
                error: Some(error), ..
            } => Err(map_rpc_error(method, error)),
            RpcResponse { result, .. } => Ok(result.unwrap_or(Value::Null)),
        }
    }

    /// `eth_call` against the latest block. Returns the raw return data.
    pub async fn eth_call(&self, call: &CallRequest) -> Result<Vec<u8>, TransportError> {
        let result = self.request("eth_call", json!([call, LATEST])).await?;
        let hex_str = result
            .as_str()
            .ok_or_else(|| TransportError::unavailable("eth_call returned a non-string result"))?;
        decode_hex(hex_str).map_err(|e| TransportError::Unavailable {
            message: format!("eth_call returned invalid hex: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// `eth_sendTransaction`. Returns the transaction hash.
    pub async fn send_transaction(&self, tx: &CallRequest) -> Result<String, TransportError> {
        let result = self.request("eth_sendTransaction", json!([tx])).await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TransportError::unavailable("eth_sendTransaction returned no hash"))
    }

    /// `eth_getTransactionReceipt`. `None` while the transaction is pending.
    pub async fn transaction_receipt(
        &self,
        hash: &str,
    ) -> Result<Option<TransactionReceipt>, TransportError> {
        let result = self
            .request("eth_getTransactionReceipt", json!([hash]))
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| TransportError::Unavailable {
                message: format!("failed to parse receipt for {hash}: {e}"),
                source: Some(Box::new(e)),
            })
    }
}

/// Classifies a JSON-RPC error object into a revert or a node failure.
fn map_rpc_error(method: &str, error: RpcErrorObject) -> TransportError {
    if error.is_revert() {
        debug!(method, code = error.code, message = %error.message, "call reverted");
        TransportError::Reverted {
            data: error.revert_data(),
            message: Some(error.message),
        }
    } else {
        warn!(method, code = error.code, message = %error.message, "json-rpc error");
        TransportError::unavailable(format!(
            "{method} failed: json-rpc error {}: {}",
            error.code, error.message
        ))
    }
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starterkit_core::Address;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(url: &str) -> RpcClient {
        RpcClient::new(url, Duration::from_secs(5)).unwrap()
    }

    fn contract() -> Address {
        "0x00000000000000000000000000000000000000cc".parse().unwrap()
    }

    #[tokio::test]
    async fn eth_call_decodes_result_hex() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [{"to": "0x00000000000000000000000000000000000000cc", "data": "0x9a88be2f"}, "latest"]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": "0x0102"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let rpc = client(&server.uri());
        let out = rpc
            .eth_call(&CallRequest::new(None, contract(), &[0x9a, 0x88, 0xbe, 0x2f]))
            .await
            .unwrap();
        assert_eq!(out, vec![0x01, 0x02]);
    }

    #[tokio::test]
    async fn revert_error_keeps_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": 3, "message": "execution reverted: nope", "data": "0x08c379a0"}
            })))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .eth_call(&CallRequest::new(None, contract(), &[]))
            .await
            .unwrap_err();
        match err {
            TransportError::Reverted { data, message } => {
                assert_eq!(data, vec![0x08, 0xc3, 0x79, 0xa0]);
                assert_eq!(message.as_deref(), Some("execution reverted: nope"));
            }
            other => panic!("expected Reverted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn revert_inside_http_error_is_still_a_revert() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32000, "message": "execution reverted"}
            })))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .eth_call(&CallRequest::new(None, contract(), &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Reverted { ref data, .. } if data.is_empty()));
    }

    #[tokio::test]
    async fn http_500_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .request("eth_chainId", json!([]))
            .await
            .unwrap_err();
        match err {
            TransportError::Unavailable { message, .. } => {
                assert!(message.contains("500"), "got: {message}");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_revert_rpc_error_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32601, "message": "the method eth_call does not exist"}
            })))
            .mount(&server)
            .await;

        let err = client(&server.uri())
            .request("eth_call", json!([]))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_unavailable() {
        let err = client("http://127.0.0.1:1")
            .request("eth_chainId", json!([]))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Unavailable { source: Some(_), .. }));
    }

    #[tokio::test]
    async fn pending_receipt_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"jsonrpc": "2.0", "id": 1, "result": null})),
            )
            .mount(&server)
            .await;

        let receipt = client(&server.uri())
            .transaction_receipt("0xabc")
            .await
            .unwrap();
        assert!(receipt.is_none());
    }

    #[test]
    fn truncate_limits_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate(&long).len(), 200);
        assert_eq!(truncate("short"), "short");
    }
}
