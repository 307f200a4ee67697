use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for refresh-token store operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Refresh token record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Top-level error for authentication flows
///
/// `InvalidCredentials` and `InvalidRefreshToken` are the only kinds a
/// client ever learns about; everything else surfaces as a generic server
/// fault with the detail kept in the logs.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Hash error: {0}")]
    Hash(#[from] auth::HashError),

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error("Session store error: {0}")]
    Session(SessionError),

    #[error("User lookup error: {0}")]
    User(#[from] UserError),
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
            auth::AuthenticationError::Hash(e) => AuthError::Hash(e),
            auth::AuthenticationError::Token(e) => AuthError::Token(e),
        }
    }
}
