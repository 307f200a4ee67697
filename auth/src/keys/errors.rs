use std::path::PathBuf;

use thiserror::Error;

/// Error type for key material loading.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Key file {path} is unreadable: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid Ed25519 key material: {0}")]
    FormatInvalid(String),
}
