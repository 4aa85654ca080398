/*
[INPUT]:  Error sources (transport, serialization, URL assembly)
[OUTPUT]: Structured error types with the legacy transport-error surface
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::error::Error as StdError;

use thiserror::Error;

/// Main error type for the BitcoinTrade adapter.
///
/// Upstream application errors (bad credentials, rejected orders) are never
/// translated here; the exchange's JSON envelope passes through to the caller
/// verbatim. Only failures before a JSON body could be obtained surface as
/// errors.
#[derive(Error, Debug)]
pub enum BitcoinTradeError {
    /// Request never completed (DNS, connect, TLS, timeout, redirect limit).
    /// The Display string keeps the wire-compatible prefix callers of the
    /// legacy client matched on.
    #[error("cURL Error #: {0}")]
    Transport(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BitcoinTradeError {
    /// Check whether the error occurred at the transport level
    pub fn is_transport(&self) -> bool {
        matches!(self, BitcoinTradeError::Transport(_))
    }

    /// Create a transport error from a reqwest failure, keeping the innermost
    /// cause so the message reads like curl's error text rather than the
    /// full wrapper chain.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message = cause.to_string();
            source = cause.source();
        }
        BitcoinTradeError::Transport(message)
    }
}

/// Result type alias for BitcoinTrade operations
pub type Result<T> = std::result::Result<T, BitcoinTradeError>;
