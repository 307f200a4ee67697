use thiserror::Error;

/// Error type for token operations.
///
/// Verification kinds stay distinct server-side for logging; HTTP-facing
/// code collapses all of them into one generic unauthorized response so a
/// caller cannot probe which check failed.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token cannot be decoded: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,

    #[error("Token issuer is not trusted")]
    IssuerMismatch,

    #[error("Refusing to issue token: {0}")]
    InvalidClaims(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
