//! The normalized SDK error type.

use thiserror::Error;

/// The single failure shape surfaced to callers.
///
/// Every failure — an error status from the server, an unreachable
/// backend, or a request that never left the client — collapses into
/// this one message-only type during post-receive normalization.
/// Transport detail (status code, headers, raw body) is discarded and
/// cannot be recovered from the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
