//! Open Trivia Database layer: session tokens, question batches, and the
//! background tasks that deliver them to the event loop.

pub mod client;
pub mod entities;
pub mod manager;
pub mod model;
pub mod transport;

use thiserror::Error;

/// Failures while talking to the trivia service.
///
/// These are transport-class errors: they are logged and the pending request
/// simply never completes. API-level failures (a non-zero `response_code` in
/// a successful reply) are judged by the caller, not here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(String),
}
