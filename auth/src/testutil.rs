//! Ed25519 PEM fixtures for tests.
//!
//! Feature-gated behind `testutil` to keep key generation out of
//! production builds. Enable it from `[dev-dependencies]`:
//!
//! ```toml
//! [dev-dependencies]
//! auth = { path = "../auth", features = ["testutil"] }
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ed25519_dalek::SigningKey;

use crate::authenticator::Authenticator;
use crate::authenticator::TokenSettings;
use crate::keys::SigningKeyPair;
use crate::token::TokenHandler;

/// PKCS#8 v1 DER prefix for an Ed25519 private key (RFC 8410).
const PKCS8_PREFIX: [u8; 16] = [
    0x30, 0x2e, // SEQUENCE, 46 bytes
    0x02, 0x01, 0x00, // INTEGER version 0
    0x30, 0x05, // SEQUENCE, 5 bytes (algorithm identifier)
    0x06, 0x03, 0x2b, 0x65, 0x70, // OID 1.3.101.112 (Ed25519)
    0x04, 0x22, // OCTET STRING, 34 bytes
    0x04, 0x20, // OCTET STRING, 32 bytes (the key itself)
];

/// SubjectPublicKeyInfo DER prefix for an Ed25519 public key.
const SPKI_PREFIX: [u8; 12] = [
    0x30, 0x2a, // SEQUENCE, 42 bytes
    0x30, 0x05, // SEQUENCE, 5 bytes (algorithm identifier)
    0x06, 0x03, 0x2b, 0x65, 0x70, // OID 1.3.101.112 (Ed25519)
    0x03, 0x21, 0x00, // BIT STRING, 33 bytes, no unused bits
];

/// Deterministic Ed25519 pair as ("PRIVATE KEY" PEM, "PUBLIC KEY" PEM).
///
/// The same `seed` always yields the same pair, so tests can build
/// matching and deliberately mismatched pairs at will.
pub fn keypair_pem(seed: u8) -> (String, String) {
    let signing_key = SigningKey::from_bytes(&[seed; 32]);

    let mut pkcs8_der = PKCS8_PREFIX.to_vec();
    pkcs8_der.extend_from_slice(&signing_key.to_bytes());

    let mut spki_der = SPKI_PREFIX.to_vec();
    spki_der.extend_from_slice(&signing_key.verifying_key().to_bytes());

    (
        pem_encode("PRIVATE KEY", &pkcs8_der),
        pem_encode("PUBLIC KEY", &spki_der),
    )
}

/// [`SigningKeyPair`] built from [`keypair_pem`] output.
pub fn signing_key_pair(seed: u8) -> SigningKeyPair {
    let (private_pem, public_pem) = keypair_pem(seed);

    SigningKeyPair::from_pem(private_pem.as_bytes(), public_pem.as_bytes())
        .expect("generated PEM pair must load")
}

/// [`TokenHandler`] over a deterministic key pair.
pub fn token_handler(seed: u8, issuer: &str) -> TokenHandler {
    TokenHandler::new(signing_key_pair(seed), issuer)
}

/// [`Authenticator`] over a deterministic key pair with short test lifetimes.
pub fn authenticator(seed: u8, issuer: &str) -> Authenticator {
    Authenticator::new(
        token_handler(seed, issuer),
        TokenSettings {
            audience: vec!["https://api.test".to_string()],
            access_token_ttl: chrono::Duration::minutes(15),
            refresh_token_ttl: chrono::Duration::hours(24),
        },
    )
}

fn pem_encode(block_type: &str, der: &[u8]) -> String {
    format!(
        "-----BEGIN {}-----\n{}\n-----END {}-----\n",
        block_type,
        STANDARD.encode(der),
        block_type
    )
}
