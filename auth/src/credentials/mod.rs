pub mod errors;
pub mod hasher;

pub use errors::HashError;
pub use hasher::CredentialHasher;
pub use hasher::HashAlgorithm;
