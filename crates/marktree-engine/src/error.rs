use thiserror::Error;

/// Errors at the token boundary.
///
/// Resolution itself never fails; only decoding tokens from an external
/// representation can.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token stream: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode token stream: {0}")]
    Encode(#[source] serde_json::Error),
}
