use thiserror::Error;

/// Error type for credential hashing operations.
#[derive(Debug, Clone, Error)]
pub enum HashError {
    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),

    #[error("Credential comparison failed: {0}")]
    ComparisonFailed(String),

    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}
