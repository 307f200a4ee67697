use auth::testutil;
use auth::Claims;
use auth::TokenError;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use serde_json::json;

const ISSUER: &str = "token-tests";

fn claims(subject: &str, issued_at: DateTime<Utc>, ttl: Duration) -> Claims {
    Claims::new(
        ISSUER,
        subject,
        vec!["https://api.test".to_string()],
        issued_at,
        ttl,
    )
}

#[test]
fn test_issue_verify_round_trip() {
    let handler = testutil::token_handler(1, ISSUER);
    let claims = claims("user-123", Utc::now(), Duration::minutes(15));

    let token = handler.issue(&claims).expect("Failed to issue token");
    assert_eq!(token.split('.').count(), 3);

    let verified = handler.verify(&token).expect("Failed to verify token");
    assert_eq!(verified, claims);
}

#[test]
fn test_issue_rejects_non_positive_lifetime() {
    let handler = testutil::token_handler(1, ISSUER);

    let zero = claims("user-123", Utc::now(), Duration::zero());
    assert!(matches!(
        handler.issue(&zero),
        Err(TokenError::InvalidClaims(_))
    ));

    let negative = claims("user-123", Utc::now(), Duration::minutes(-5));
    assert!(matches!(
        handler.issue(&negative),
        Err(TokenError::InvalidClaims(_))
    ));
}

#[test]
fn test_issue_rejects_empty_subject() {
    let handler = testutil::token_handler(1, ISSUER);
    let claims = claims("", Utc::now(), Duration::minutes(15));

    assert!(matches!(
        handler.issue(&claims),
        Err(TokenError::InvalidClaims(_))
    ));
}

#[test]
fn test_verify_rejects_foreign_keypair() {
    let signer = testutil::token_handler(1, ISSUER);
    let verifier = testutil::token_handler(2, ISSUER);

    let token = signer
        .issue(&claims("user-123", Utc::now(), Duration::minutes(15)))
        .expect("Failed to issue token");

    assert!(matches!(
        verifier.verify(&token),
        Err(TokenError::SignatureInvalid)
    ));
}

#[test]
fn test_verify_rejects_expired_token() {
    let handler = testutil::token_handler(1, ISSUER);

    // Issuable (exp > iat) but already past expiry at verification time.
    let stale = claims(
        "user-123",
        Utc::now() - Duration::hours(2),
        Duration::hours(1),
    );
    let token = handler.issue(&stale).expect("Failed to issue token");

    assert!(matches!(handler.verify(&token), Err(TokenError::Expired)));
}

#[test]
fn test_verify_rejects_untrusted_issuer() {
    let handler = testutil::token_handler(1, ISSUER);

    let foreign = Claims::new(
        "someone-else",
        "user-123",
        Vec::new(),
        Utc::now(),
        Duration::minutes(15),
    );
    let token = handler.issue(&foreign).expect("Failed to issue token");

    assert!(matches!(
        handler.verify(&token),
        Err(TokenError::IssuerMismatch)
    ));
}

#[test]
fn test_verify_rejects_hmac_downgrade() {
    let handler = testutil::token_handler(1, ISSUER);
    let claims = claims("user-123", Utc::now(), Duration::minutes(15));

    // Signed with a symmetric key but claiming the HS256 algorithm; a
    // verifier pinned to EdDSA must refuse it no matter what the payload says.
    let downgraded = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"guessable-shared-secret"),
    )
    .expect("Failed to encode HS256 token");

    assert!(matches!(
        handler.verify(&downgraded),
        Err(TokenError::SignatureInvalid)
    ));
}

#[test]
fn test_verify_rejects_unknown_claims() {
    let handler = testutil::token_handler(1, ISSUER);
    let keys = testutil::signing_key_pair(1);

    let now = Utc::now().timestamp();
    let payload = json!({
        "iss": ISSUER,
        "sub": "user-123",
        "aud": ["https://api.test"],
        "iat": now,
        "exp": now + 900,
        "role": "admin",
    });

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::EdDSA),
        &payload,
        keys.encoding_key(),
    )
    .expect("Failed to encode token with extra claim");

    assert!(matches!(
        handler.verify(&token),
        Err(TokenError::Malformed(_))
    ));
}

#[test]
fn test_verify_rejects_garbage() {
    let handler = testutil::token_handler(1, ISSUER);

    assert!(matches!(
        handler.verify("not.a.token"),
        Err(TokenError::Malformed(_))
    ));
    assert!(matches!(
        handler.verify(""),
        Err(TokenError::Malformed(_))
    ));
}
