//! Error types.
//!
//! The windowing engine itself is infallible: invalid inputs degrade to safe
//! layouts and redundant fetches are suppressed. Only completing a page
//! request can fail.

use thiserror::Error;

/// Errors raised while applying a fetched page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The completed request is not the one currently pending.
    #[error("stale page response (request {received}, pending {pending})")]
    StaleRequest { received: u64, pending: u64 },
    /// No request is pending.
    #[error("no page request is pending")]
    NoPendingRequest,
    /// The page payload could not be decoded.
    #[error("invalid page payload: {0}")]
    Decode(#[from] serde_json::Error),
}
