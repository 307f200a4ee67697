use auth::testutil;
use auth::AuthenticationError;

const SUBJECT: &str = "b52a6018-9e07-4a4f-8f6f-3b2f1c9f7d21";

#[test]
fn test_authenticate_success() {
    let authenticator = testutil::authenticator(5, "authenticator-tests");

    let stored_hash = authenticator
        .hash_password("pass_word!")
        .expect("Failed to hash password");

    let session = authenticator
        .authenticate("pass_word!", &stored_hash, SUBJECT)
        .expect("Authentication failed");

    assert!(!session.access_token.is_empty());
    assert!(!session.refresh_token.is_empty());
    assert_ne!(session.access_token, session.refresh_token);
    assert!(session.refresh_expires_at > session.issued_at);

    let access_claims = authenticator
        .verify_token(&session.access_token)
        .expect("Access token failed verification");
    assert_eq!(access_claims.sub, SUBJECT);
    assert_eq!(access_claims.aud, vec!["https://api.test".to_string()]);

    let refresh_claims = authenticator
        .verify_token(&session.refresh_token)
        .expect("Refresh token failed verification");
    assert_eq!(refresh_claims.sub, SUBJECT);
    assert!(refresh_claims.aud.is_empty());
    assert!(refresh_claims.exp > access_claims.exp);
}

#[test]
fn test_authenticate_invalid_password() {
    let authenticator = testutil::authenticator(5, "authenticator-tests");

    let stored_hash = authenticator
        .hash_password("pass_word!")
        .expect("Failed to hash password");

    let result = authenticator.authenticate("wrong_password", &stored_hash, SUBJECT);
    assert!(matches!(
        result,
        Err(AuthenticationError::InvalidCredentials)
    ));
}

#[test]
fn test_refresh_digest_round_trip() {
    let authenticator = testutil::authenticator(5, "authenticator-tests");

    let session = authenticator
        .mint_session(SUBJECT)
        .expect("Failed to mint session");

    // Only the digest is meant for storage; it must match the raw token and
    // nothing else.
    assert_ne!(session.refresh_token_hash, session.refresh_token);
    assert!(authenticator
        .refresh_token_matches(&session.refresh_token, &session.refresh_token_hash)
        .expect("Digest comparison failed"));
    assert!(!authenticator
        .refresh_token_matches(&session.access_token, &session.refresh_token_hash)
        .expect("Digest comparison failed"));
}
