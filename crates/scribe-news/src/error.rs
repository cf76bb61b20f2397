//! News proxy error types

use thiserror::Error;

/// Failure classes for outbound calls. Each class carries a distinct
/// message so the UI can show it without branching on variants.
#[derive(Error, Debug)]
pub enum NewsError {
    /// Required credential absent; raised before any network call.
    #[error("News service configuration error: no API key is set")]
    MissingApiKey,

    /// Remote responded with a non-success HTTP status.
    #[error("API Error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Transport succeeded but the payload carried a non-ok status.
    #[error("News service error: {0}")]
    UpstreamPayload(String),

    /// Request was sent but no response arrived.
    #[error("No response from the news server: {0}")]
    NoResponse(String),

    /// Request could not be constructed or sent at all.
    #[error("Failed to set up news request: {0}")]
    Request(String),
}
