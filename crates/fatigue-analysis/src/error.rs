//! Error types for the analysis contract
//!
//! None of these reach the caller of [`AnalysisService::analyze`](crate::AnalysisService::analyze);
//! they are logged and replaced with the fallback payload.

/// Analysis failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Request body is not JSON at all
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Request body is JSON but not `{ "logs": [...] }`
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The text generator could not be reached or refused the call
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// The text generator answered with something other than text
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The reply held neither a JSON payload nor a diagram block
    #[error("reply could not be interpreted")]
    Unparseable,
}
