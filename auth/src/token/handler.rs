use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::keys::SigningKeyPair;

/// Token issuer and verifier over one Ed25519 key pair.
///
/// Signing uses the private half; verification needs only the public half,
/// so a deployment can split issuer and verifier across processes without
/// ever sharing the signing secret.
pub struct TokenHandler {
    keys: SigningKeyPair,
    issuer: String,
    validation: Validation,
}

impl TokenHandler {
    /// Create a new token handler.
    ///
    /// # Arguments
    /// * `keys` - Ed25519 pair, immutable for the process lifetime
    /// * `issuer` - The only issuer verification trusts
    pub fn new(keys: SigningKeyPair, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_issuer(&[&issuer]);
        // Audience is carried as claim data, not verified here.
        validation.validate_aud = false;
        // Expired means expired; no grace window.
        validation.leeway = 0;

        Self {
            keys,
            issuer,
            validation,
        }
    }

    /// The issuer this handler signs as and trusts.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Sign claims into a compact three-segment token string.
    ///
    /// Refuses claims whose lifetime is over before it starts or whose
    /// subject is nobody.
    ///
    /// # Errors
    /// * `InvalidClaims` - `exp <= iat` or empty subject
    /// * `EncodingFailed` - Signing or serialization failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        if claims.sub.is_empty() {
            return Err(TokenError::InvalidClaims("subject is empty".to_string()));
        }

        if claims.exp <= claims.iat {
            return Err(TokenError::InvalidClaims(format!(
                "expiry {} is not after issuance {}",
                claims.exp, claims.iat
            )));
        }

        encode(&Header::new(Algorithm::EdDSA), claims, self.keys.encoding_key())
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// The declared algorithm must be exactly EdDSA; "none" and HMAC-family
    /// downgrade attempts are rejected before any claim is trusted. The
    /// signature is checked against the public key, expiry against the
    /// current time, and the issuer against the configured trusted issuer.
    ///
    /// # Errors
    /// * `Malformed` - The token cannot be decoded into the claims set
    /// * `SignatureInvalid` - Signature or algorithm check failed
    /// * `Expired` - Past expiry
    /// * `IssuerMismatch` - Issuer differs from the trusted issuer
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::SignatureInvalid
                }
                ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}
