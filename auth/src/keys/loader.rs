use std::fs;
use std::path::Path;

use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;

use super::errors::KeyError;

/// Ed25519 signing key pair for token issuance and verification.
///
/// Loaded once at process start and immutable afterwards; rotating keys
/// means restarting the process, so the verifier is never asked to accept
/// a token signed by a key it has not held. The private half is wrapped in
/// an opaque [`EncodingKey`] and does not leave this struct.
pub struct SigningKeyPair {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningKeyPair {
    /// Load both halves of the pair from PEM files.
    ///
    /// # Arguments
    /// * `private_key_path` - PEM file with a "PRIVATE KEY" block (PKCS#8)
    /// * `public_key_path` - PEM file with a "PUBLIC KEY" block (SPKI)
    ///
    /// # Errors
    /// * `FileUnreadable` - A path cannot be read
    /// * `FormatInvalid` - PEM decoding fails, the expected block type is
    ///   missing, or the key is not Ed25519
    pub fn from_pem_files(
        private_key_path: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
    ) -> Result<Self, KeyError> {
        Ok(Self {
            encoding_key: load_private_key(private_key_path)?,
            decoding_key: load_public_key(public_key_path)?,
        })
    }

    /// Build a pair from in-memory PEM contents.
    ///
    /// For deployments that hand key material over the environment or a
    /// secret manager instead of files.
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, KeyError> {
        require_block(private_key_pem, "PRIVATE KEY")?;
        require_block(public_key_pem, "PUBLIC KEY")?;

        Ok(Self {
            encoding_key: EncodingKey::from_ed_pem(private_key_pem)
                .map_err(|e| KeyError::FormatInvalid(e.to_string()))?,
            decoding_key: DecodingKey::from_ed_pem(public_key_pem)
                .map_err(|e| KeyError::FormatInvalid(e.to_string()))?,
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// Load an Ed25519 private key ("PRIVATE KEY" PEM block) for signing.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<EncodingKey, KeyError> {
    let path = path.as_ref();
    let pem = read_key_file(path)?;
    require_block(&pem, "PRIVATE KEY")?;

    EncodingKey::from_ed_pem(&pem).map_err(|e| KeyError::FormatInvalid(e.to_string()))
}

/// Load an Ed25519 public key ("PUBLIC KEY" PEM block) for verification.
///
/// The public half may be distributed to any verifier; a process holding
/// only this key can validate tokens but never mint them.
pub fn load_public_key(path: impl AsRef<Path>) -> Result<DecodingKey, KeyError> {
    let path = path.as_ref();
    let pem = read_key_file(path)?;
    require_block(&pem, "PUBLIC KEY")?;

    DecodingKey::from_ed_pem(&pem).map_err(|e| KeyError::FormatInvalid(e.to_string()))
}

fn read_key_file(path: &Path) -> Result<Vec<u8>, KeyError> {
    fs::read(path).map_err(|source| KeyError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn require_block(pem: &[u8], block_type: &str) -> Result<(), KeyError> {
    let text = std::str::from_utf8(pem)
        .map_err(|_| KeyError::FormatInvalid("key material is not valid UTF-8".to_string()))?;

    let header = format!("-----BEGIN {}-----", block_type);
    if !text.contains(&header) {
        return Err(KeyError::FormatInvalid(format!(
            "missing \"{}\" PEM block",
            block_type
        )));
    }

    Ok(())
}
