use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Bad signature, malformed structure, or unknown signing key.
    #[error("Token is invalid: {0}")]
    Invalid(String),

    /// Signature checked out but the expiry timestamp is in the past.
    #[error("Token is expired")]
    Expired,
}
