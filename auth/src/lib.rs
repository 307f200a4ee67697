//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Credential hashing (Argon2id for passwords, SHA-256 for refresh-token secrets)
//! - Ed25519 key material loading from PEM files
//! - Signed token issuance and validation (EdDSA)
//! - Sign-in coordination (credential check plus session minting)
//!
//! The library knows nothing about storage or HTTP. Services inject the
//! [`Authenticator`] where they need the full sign-in flow, or the
//! [`TokenHandler`] alone where only verification is required, since verification
//! needs nothing but the public half of the key pair.
//!
//! # Examples
//!
//! ## Credential hashing
//! ```
//! use auth::{CredentialHasher, HashAlgorithm};
//!
//! let hasher = CredentialHasher::new();
//! let digest = hasher.hash("my_password", HashAlgorithm::Argon2id).unwrap();
//! let is_match = hasher.compare("my_password", &digest, HashAlgorithm::Argon2id).unwrap();
//! assert!(is_match);
//! ```
//!
//! ## Token issuance and verification
//! ```no_run
//! use auth::{Claims, SigningKeyPair, TokenHandler};
//! use chrono::{Duration, Utc};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let keys = SigningKeyPair::from_pem_files("private_key.pem", "public_key.pem")?;
//! let handler = TokenHandler::new(keys, "my-service");
//!
//! let claims = Claims::new(
//!     "my-service",
//!     "6f1c7a0e-0db2-4e8a-b7c3-5a4c4fbb2a10",
//!     vec!["https://api.example.com".to_string()],
//!     Utc::now(),
//!     Duration::minutes(15),
//! );
//! let token = handler.issue(&claims)?;
//! let verified = handler.verify(&token)?;
//! assert_eq!(verified.sub, claims.sub);
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod credentials;
pub mod keys;
pub mod token;

#[cfg(feature = "testutil")]
pub mod testutil;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedSession;
pub use authenticator::TokenSettings;
pub use credentials::CredentialHasher;
pub use credentials::HashAlgorithm;
pub use credentials::HashError;
pub use keys::KeyError;
pub use keys::SigningKeyPair;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenHandler;
