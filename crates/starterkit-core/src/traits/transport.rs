// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport seam between the client and the external contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::Address;

/// Delivers ABI-encoded calldata to a contract.
///
/// Implementations hold no state between calls that the client depends on.
/// `call` is a read-only invocation; `send` submits a state-changing
/// invocation and resolves once the external store has committed or
/// rejected it.
#[async_trait]
pub trait ContractTransport: Send + Sync + 'static {
    /// Human-readable name of this transport, used in logs.
    fn name(&self) -> &str;

    /// Executes a read-only call and returns the raw return data.
    async fn call(&self, contract: &Address, calldata: Vec<u8>) -> Result<Vec<u8>, TransportError>;

    /// Submits a state-changing call.
    async fn send(&self, contract: &Address, calldata: Vec<u8>) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: ContractTransport + ?Sized> ContractTransport for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn call(&self, contract: &Address, calldata: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        (**self).call(contract, calldata).await
    }

    async fn send(&self, contract: &Address, calldata: Vec<u8>) -> Result<(), TransportError> {
        (**self).send(contract, calldata).await
    }
}
