// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the StarterKit plugin client.

use strum::{Display, EnumString};
use thiserror::Error;

/// The primary error type returned by every component operation.
///
/// The first four variants are the domain taxonomy a calling UI renders
/// differently; they are surfaced exactly as produced and never retried.
#[derive(Debug, Error)]
pub enum StarterKitError {
    /// The referenced website/version pair does not exist.
    #[error("configuration target not found: {reason}")]
    NotFound { reason: String },

    /// The caller lacks permission for a write.
    #[error("write rejected: insufficient permission: {reason}")]
    Unauthorized { reason: String },

    /// The external call could not be completed (network, node availability).
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Locally detectable bad input, rejected before any remote call.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The contract rejected the call for a reason outside the known taxonomy.
    #[error("rejected by contract: {reason}")]
    Rejected { reason: String },

    /// The contract answered with bytes that do not decode as the expected ABI type.
    #[error("abi error: {0}")]
    Abi(String),

    /// Local configuration errors (missing contract address, sender account, etc.).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StarterKitError {
    /// Shorthand for a transport failure with an underlying cause.
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StarterKitError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StarterKitError::NotFound { .. } => ErrorKind::NotFound,
            StarterKitError::Unauthorized { .. } => ErrorKind::Unauthorized,
            StarterKitError::Transport { .. } => ErrorKind::TransportFailure,
            StarterKitError::MalformedInput(_) => ErrorKind::MalformedInput,
            StarterKitError::Rejected { .. } => ErrorKind::Rejected,
            StarterKitError::Abi(_) => ErrorKind::Abi,
            StarterKitError::Config(_) => ErrorKind::Config,
            StarterKitError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Coarse error category, used for exit codes and `--json` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Unauthorized,
    TransportFailure,
    MalformedInput,
    Rejected,
    Abi,
    Config,
    Internal,
}

/// Failure reported by a [`ContractTransport`](crate::traits::ContractTransport).
///
/// Reverts are kept apart from connectivity failures so the client can
/// classify them into the domain taxonomy.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The node could not be reached or answered with something unusable.
    #[error("{message}")]
    Unavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The contract reverted. `data` is the raw revert payload (may be empty).
    #[error("execution reverted: {}", .message.as_deref().unwrap_or("no reason given"))]
    Reverted { data: Vec<u8>, message: Option<String> },

    /// The transport cannot perform the requested operation as configured.
    #[error("unsupported transport operation: {0}")]
    Unsupported(String),
}

impl TransportError {
    /// Shorthand for an `Unavailable` error without an underlying cause.
    pub fn unavailable(message: impl Into<String>) -> Self {
        TransportError::Unavailable {
            message: message.into(),
            source: None,
        }
    }
}
