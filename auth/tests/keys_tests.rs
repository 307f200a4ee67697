use std::fs;

use auth::keys::loader::load_private_key;
use auth::keys::loader::load_public_key;
use auth::testutil;
use auth::Claims;
use auth::KeyError;
use auth::SigningKeyPair;
use auth::TokenHandler;
use chrono::Duration;
use chrono::Utc;

#[test]
fn test_load_pair_from_pem_files() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let private_path = dir.path().join("private_key.pem");
    let public_path = dir.path().join("public_key.pem");

    let (private_pem, public_pem) = testutil::keypair_pem(3);
    fs::write(&private_path, private_pem).expect("Failed to write private key");
    fs::write(&public_path, public_pem).expect("Failed to write public key");

    let keys = SigningKeyPair::from_pem_files(&private_path, &public_path)
        .expect("Failed to load key pair");

    // The loaded pair must actually sign and verify.
    let handler = TokenHandler::new(keys, "keys-tests");
    let claims = Claims::new(
        "keys-tests",
        "user-123",
        Vec::new(),
        Utc::now(),
        Duration::minutes(5),
    );
    let token = handler.issue(&claims).expect("Failed to issue token");
    assert_eq!(handler.verify(&token).expect("Failed to verify"), claims);
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let result = load_private_key(dir.path().join("does_not_exist.pem"));
    assert!(matches!(result, Err(KeyError::FileUnreadable { .. })));
}

#[test]
fn test_garbage_content_is_format_invalid() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("garbage.pem");
    fs::write(&path, "this is not a pem container").expect("Failed to write file");

    assert!(matches!(
        load_private_key(&path),
        Err(KeyError::FormatInvalid(_))
    ));
    assert!(matches!(
        load_public_key(&path),
        Err(KeyError::FormatInvalid(_))
    ));
}

#[test]
fn test_swapped_block_types_are_format_invalid() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let private_path = dir.path().join("private_key.pem");
    let public_path = dir.path().join("public_key.pem");

    let (private_pem, public_pem) = testutil::keypair_pem(4);
    fs::write(&private_path, private_pem).expect("Failed to write private key");
    fs::write(&public_path, public_pem).expect("Failed to write public key");

    // A public key where a private key is expected, and vice versa.
    assert!(matches!(
        load_private_key(&public_path),
        Err(KeyError::FormatInvalid(_))
    ));
    assert!(matches!(
        load_public_key(&private_path),
        Err(KeyError::FormatInvalid(_))
    ));
}
