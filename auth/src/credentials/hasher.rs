use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use sha2::Digest;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::HashError;

/// Supported hashing algorithms.
///
/// `Argon2id` is the salted, adaptive-cost choice for user passwords.
/// `Sha256` is a fast fixed-length digest for refresh-token secrets, which
/// are already high entropy and rotated, so adaptive cost buys no security
/// there and only burns CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Argon2id,
    Sha256,
}

/// Credential hashing implementation.
///
/// One entry point for both password storage and refresh-token digests.
pub struct CredentialHasher;

impl CredentialHasher {
    /// Create a new hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a secret with the requested algorithm.
    ///
    /// `Argon2id` produces a PHC string with a fresh random salt;
    /// `Sha256` produces a lowercase hex digest.
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing operation itself failed
    pub fn hash(&self, secret: &str, algorithm: HashAlgorithm) -> Result<String, HashError> {
        match algorithm {
            HashAlgorithm::Argon2id => {
                let salt = SaltString::generate(&mut OsRng);

                Argon2::default()
                    .hash_password(secret.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| HashError::HashingFailed(e.to_string()))
            }
            HashAlgorithm::Sha256 => Ok(format!("{:x}", Sha256::digest(secret.as_bytes()))),
        }
    }

    /// Compare a secret against a stored digest.
    ///
    /// The `Sha256` path compares in constant time; argon2's own verification
    /// already resists timing probes, so the primitive is trusted there.
    ///
    /// # Errors
    /// * `ComparisonFailed` - The stored digest cannot be parsed
    /// * `UnsupportedAlgorithm` - The stored digest names an algorithm
    ///   outside the supported set
    pub fn compare(
        &self,
        secret: &str,
        digest: &str,
        algorithm: HashAlgorithm,
    ) -> Result<bool, HashError> {
        match algorithm {
            HashAlgorithm::Argon2id => {
                let parsed_hash = PasswordHash::new(digest).map_err(|e| {
                    HashError::ComparisonFailed(format!("Invalid stored digest: {}", e))
                })?;

                if !matches!(
                    parsed_hash.algorithm.as_str(),
                    "argon2id" | "argon2i" | "argon2d"
                ) {
                    return Err(HashError::UnsupportedAlgorithm(
                        parsed_hash.algorithm.as_str().to_string(),
                    ));
                }

                Ok(Argon2::default()
                    .verify_password(secret.as_bytes(), &parsed_hash)
                    .is_ok())
            }
            HashAlgorithm::Sha256 => {
                let computed = format!("{:x}", Sha256::digest(secret.as_bytes()));

                Ok(computed.as_bytes().ct_eq(digest.as_bytes()).into())
            }
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_hash_and_compare() {
        let hasher = CredentialHasher::new();
        let password = "my_secure_password";

        let digest = hasher
            .hash(password, HashAlgorithm::Argon2id)
            .expect("Failed to hash password");

        assert!(hasher
            .compare(password, &digest, HashAlgorithm::Argon2id)
            .expect("Failed to compare password"));

        assert!(!hasher
            .compare("wrong_password", &digest, HashAlgorithm::Argon2id)
            .expect("Failed to compare password"));
    }

    #[test]
    fn test_argon2_digests_are_salted() {
        let hasher = CredentialHasher::new();

        let first = hasher.hash("secret", HashAlgorithm::Argon2id).unwrap();
        let second = hasher.hash("secret", HashAlgorithm::Argon2id).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_sha256_hash_and_compare() {
        let hasher = CredentialHasher::new();
        let secret = "high-entropy-refresh-secret";

        let digest = hasher
            .hash(secret, HashAlgorithm::Sha256)
            .expect("Failed to hash secret");

        // Fixed-length lowercase hex
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));

        assert!(hasher
            .compare(secret, &digest, HashAlgorithm::Sha256)
            .unwrap());
        assert!(!hasher
            .compare("another-secret", &digest, HashAlgorithm::Sha256)
            .unwrap());
    }

    #[test]
    fn test_sha256_is_deterministic() {
        let hasher = CredentialHasher::new();

        assert_eq!(
            hasher.hash("abc", HashAlgorithm::Sha256).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_compare_invalid_stored_digest() {
        let hasher = CredentialHasher::new();

        let result = hasher.compare("password", "not_a_phc_string", HashAlgorithm::Argon2id);
        assert!(matches!(result, Err(HashError::ComparisonFailed(_))));
    }

    #[test]
    fn test_compare_unsupported_stored_algorithm() {
        let hasher = CredentialHasher::new();

        // A valid PHC string, but not from the argon2 family.
        let scrypt_digest =
            "$scrypt$ln=16,r=8,p=1$aM15713r3Xsvxbi31lqr1Q$nFNh2CVHVjNldFVKDHDlm4CmdRSCdEBsjjJxD+iCs5E";

        let result = hasher.compare("password", scrypt_digest, HashAlgorithm::Argon2id);
        assert!(matches!(
            result,
            Err(HashError::UnsupportedAlgorithm(ref alg)) if alg == "scrypt"
        ));
    }
}
