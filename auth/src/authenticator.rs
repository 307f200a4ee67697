use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::credentials::CredentialHasher;
use crate::credentials::HashAlgorithm;
use crate::credentials::HashError;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining credential verification and
/// token minting.
///
/// Owns the hasher and the token handler; storage stays with the caller,
/// which receives the refresh-token digest to persist.
pub struct Authenticator {
    hasher: CredentialHasher,
    tokens: TokenHandler,
    settings: TokenSettings,
}

/// Lifetimes and audience for minted sessions.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    /// Audience embedded in access tokens
    pub audience: Vec<String>,
    /// Access-token lifetime
    pub access_token_ttl: Duration,
    /// Refresh-token lifetime
    pub refresh_token_ttl: Duration,
}

/// Result of a successful sign-in or rotation.
///
/// The two token strings go to the client; the digest and timestamps are
/// what the refresh-token store needs to remember the session. The raw
/// refresh token must never be persisted.
pub struct IssuedSession {
    /// Short-lived access token
    pub access_token: String,
    /// Long-lived refresh token
    pub refresh_token: String,
    /// SHA-256 digest of `refresh_token`
    pub refresh_token_hash: String,
    /// Issuance instant shared by both tokens
    pub issued_at: DateTime<Utc>,
    /// Expiry of the refresh token
    pub refresh_expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Hash error: {0}")]
    Hash(#[from] HashError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `tokens` - Configured token handler (keys plus trusted issuer)
    /// * `settings` - Session lifetimes and audience
    pub fn new(tokens: TokenHandler, settings: TokenSettings) -> Self {
        Self {
            hasher: CredentialHasher::new(),
            tokens,
            settings,
        }
    }

    /// Hash a password for storage (argon2id PHC string).
    pub fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.hasher.hash(password, HashAlgorithm::Argon2id)
    }

    /// Verify credentials and mint a session for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored argon2 digest
    /// * `subject` - Principal identifier embedded as the `sub` claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Hash` - The stored digest is unusable
    /// * `Token` - Signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<IssuedSession, AuthenticationError> {
        let is_match = self
            .hasher
            .compare(password, stored_hash, HashAlgorithm::Argon2id)?;

        if !is_match {
            return Err(AuthenticationError::InvalidCredentials);
        }

        self.mint_session(subject)
    }

    /// Mint a fresh access + refresh pair without credential verification.
    ///
    /// For rotation flows where the session has already been proven by
    /// presenting a valid refresh token.
    pub fn mint_session(&self, subject: &str) -> Result<IssuedSession, AuthenticationError> {
        let issued_at = Utc::now();

        let access_claims = Claims::new(
            self.tokens.issuer(),
            subject,
            self.settings.audience.clone(),
            issued_at,
            self.settings.access_token_ttl,
        );
        // The refresh token names no audience; it is only ever presented
        // back to the issuing service.
        let refresh_claims = Claims::new(
            self.tokens.issuer(),
            subject,
            Vec::new(),
            issued_at,
            self.settings.refresh_token_ttl,
        );

        let access_token = self.tokens.issue(&access_claims)?;
        let refresh_token = self.tokens.issue(&refresh_claims)?;
        let refresh_token_hash = self.hasher.hash(&refresh_token, HashAlgorithm::Sha256)?;

        Ok(IssuedSession {
            access_token,
            refresh_token,
            refresh_token_hash,
            issued_at,
            refresh_expires_at: issued_at + self.settings.refresh_token_ttl,
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenError` - Any verification failure, kind preserved for logging
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.tokens.verify(token)
    }

    /// Compare a presented refresh token against its stored digest.
    ///
    /// Constant-time on the digest comparison.
    pub fn refresh_token_matches(
        &self,
        presented: &str,
        stored_hash: &str,
    ) -> Result<bool, HashError> {
        self.hasher
            .compare(presented, stored_hash, HashAlgorithm::Sha256)
    }
}
