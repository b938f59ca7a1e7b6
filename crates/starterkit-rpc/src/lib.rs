// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ethereum JSON-RPC transport for the StarterKit plugin client.
//!
//! Implements [`ContractTransport`] over an HTTP JSON-RPC endpoint. Reads
//! are `eth_call` against the latest block. Writes are preflighted with
//! `eth_call` from the sender, submitted with `eth_sendTransaction` and then
//! confirmed by polling `eth_getTransactionReceipt`. Signing is left to the
//! node or wallet behind the endpoint.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use starterkit_config::RpcConfig;
use starterkit_core::{Address, ContractTransport, StarterKitError, TransportError};
use tracing::{debug, info, warn};

use crate::client::RpcClient;
use crate::types::CallRequest;

/// JSON-RPC implementation of [`ContractTransport`].
#[derive(Debug)]
pub struct JsonRpcTransport {
    rpc: RpcClient,
    from: Option<Address>,
    poll_interval: Duration,
    max_polls: u32,
}

impl JsonRpcTransport {
    /// Creates a transport from the `[rpc]` configuration section.
    pub fn new(config: &RpcConfig) -> Result<Self, StarterKitError> {
        let rpc = RpcClient::new(
            config.url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        info!(url = %config.url, sender = ?config.from, "json-rpc transport initialized");
        Ok(Self {
            rpc,
            from: config.from,
            poll_interval: Duration::from_millis(config.receipt_poll_interval_ms),
            max_polls: config.receipt_max_polls.max(1),
        })
    }

    /// The sender account used for writes, if any.
    pub fn sender(&self) -> Option<&Address> {
        self.from.as_ref()
    }

    /// Polls for the receipt of `hash` until it lands or polls run out.
    async fn await_receipt(&self, hash: &str) -> Result<(), TransportError> {
        for poll in 0..self.max_polls {
            if let Some(receipt) = self.rpc.transaction_receipt(hash).await? {
                if receipt.succeeded() {
                    info!(
                        tx_hash = %receipt.transaction_hash,
                        block = receipt.block_number.as_deref().unwrap_or("unknown"),
                        "transaction confirmed"
                    );
                    return Ok(());
                }
                warn!(tx_hash = %hash, "transaction reverted on chain");
                return Err(TransportError::Reverted {
                    data: Vec::new(),
                    message: Some(format!("transaction {hash} reverted")),
                });
            }
            debug!(tx_hash = %hash, poll, "receipt pending");
            if poll + 1 < self.max_polls {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        warn!(tx_hash = %hash, polls = self.max_polls, "transaction not confirmed");
        Err(TransportError::unavailable(format!(
            "transaction {hash} not confirmed after {} polls; re-read the configuration to learn whether it was applied",
            self.max_polls
        )))
    }
}

#[async_trait]
impl ContractTransport for JsonRpcTransport {
    fn name(&self) -> &str {
        "json-rpc"
    }

    async fn call(&self, contract: &Address, calldata: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        self.rpc
            .eth_call(&CallRequest::new(None, *contract, &calldata))
            .await
    }

    async fn send(&self, contract: &Address, calldata: Vec<u8>) -> Result<(), TransportError> {
        let from = self.from.ok_or_else(|| {
            TransportError::Unsupported("no sender account configured (set rpc.from)".to_string())
        })?;
        let tx = CallRequest::new(Some(from), *contract, &calldata);

        // A failing preflight carries the revert reason; a mined revert does not.
        self.rpc.eth_call(&tx).await?;

        let hash = self.rpc.send_transaction(&tx).await?;
        debug!(tx_hash = %hash, "transaction submitted");
        self.await_receipt(&hash).await
    }
}
