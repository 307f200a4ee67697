use std::sync::Arc;

use auth::Authenticator;

use crate::domain::session::errors::AuthError;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::SessionTokens;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for sign-in, refresh rotation, and logout.
///
/// Coordinates the authenticator (credential check, token minting) with
/// the refresh-token store. Nothing here is held across a hash or compare
/// call; the expensive work happens lock-free.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    sessions: Arc<RR>,
    authenticator: Arc<Authenticator>,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(users: Arc<UR>, sessions: Arc<RR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            sessions,
            authenticator,
        }
    }

    /// Verify credentials, mint a token pair, persist the refresh digest.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller. A successful sign-in creates one new session record and
    /// leaves any existing sessions for the user untouched.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Session` / `User` / `Hash` / `Token` - Infrastructure faults
    pub async fn sign_in(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<(User, SessionTokens), AuthError> {
        let user = self
            .users
            .find_by_email(email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let session =
            self.authenticator
                .authenticate(password, &user.password_hash, &user.id.to_string())?;

        self.sessions
            .create(
                &user.id,
                &session.refresh_token_hash,
                session.issued_at,
                session.refresh_expires_at,
            )
            .await
            .map_err(AuthError::Session)?;

        Ok((
            user,
            SessionTokens {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
            },
        ))
    }

    /// Exchange a refresh token for a fresh pair, rotating the stored record.
    ///
    /// The presented token must verify as a signed token, its subject must
    /// name a user with an active session, and its digest must match that
    /// session's stored hash. Every failure collapses to
    /// `InvalidRefreshToken` for the caller; the kind is logged here.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Any verification or lookup failure
    /// * `Session` / `Hash` / `Token` - Infrastructure faults
    pub async fn refresh(&self, presented: &str) -> Result<SessionTokens, AuthError> {
        let claims = self.authenticator.verify_token(presented).map_err(|e| {
            tracing::warn!(kind = %e, "Refresh token failed verification");
            AuthError::InvalidRefreshToken
        })?;

        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            tracing::warn!(error = %e, "Refresh token subject is not a user id");
            AuthError::InvalidRefreshToken
        })?;

        let record = match self.sessions.find_active_by_user(&user_id).await {
            Ok(record) => record,
            Err(SessionError::NotFound) => {
                tracing::warn!(user_id = %user_id, "Refresh attempted without an active session");
                return Err(AuthError::InvalidRefreshToken);
            }
            Err(e) => return Err(AuthError::Session(e)),
        };

        let is_match = self
            .authenticator
            .refresh_token_matches(presented, &record.token_hash)?;
        if !is_match {
            tracing::warn!(user_id = %user_id, "Presented refresh token does not match the active session");
            return Err(AuthError::InvalidRefreshToken);
        }

        let minted = self.authenticator.mint_session(&claims.sub)?;

        let _rotated = self
            .sessions
            .rotate(
                &record.id,
                &user_id,
                &minted.refresh_token_hash,
                minted.issued_at,
                minted.refresh_expires_at,
            )
            .await
            .map_err(AuthError::Session)?;

        Ok(SessionTokens {
            access_token: minted.access_token,
            refresh_token: minted.refresh_token,
        })
    }

    /// Revoke the caller's active session.
    ///
    /// Signing out with no active session is a no-op, not an error.
    ///
    /// # Errors
    /// * `Session` - Database operation failed
    pub async fn sign_out(&self, user_id: &UserId) -> Result<(), AuthError> {
        match self.sessions.find_active_by_user(user_id).await {
            Ok(record) => self
                .sessions
                .revoke(&record.id)
                .await
                .map_err(AuthError::Session),
            Err(SessionError::NotFound) => Ok(()),
            Err(e) => Err(AuthError::Session(e)),
        }
    }

    /// Drop expired records; returns how many were deleted.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    pub async fn sweep_expired_sessions(&self) -> Result<u64, SessionError> {
        self.sessions.sweep_expired().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::Duration;
    use chrono::Utc;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::session::models::RefreshTokenId;
    use crate::domain::session::models::RefreshTokenRecord;
    use crate::domain::session::ports::MockRefreshTokenRepository;
    use crate::domain::user::ports::MockUserRepository;

    const ISSUER: &str = "auth-service-tests";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(auth::testutil::authenticator(13, ISSUER))
    }

    fn test_user(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId::new(),
            first_name: "Nicola".to_string(),
            last_name: "Tesla".to_string(),
            email: EmailAddress::new("nicola@example.com".to_string()).unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            is_email_verified: true,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn record_from_args(
        user_id: &UserId,
        token_hash: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> RefreshTokenRecord {
        RefreshTokenRecord {
            id: RefreshTokenId::new(),
            user_id: *user_id,
            token_hash: token_hash.to_string(),
            issued_at,
            expires_at,
            revoked: false,
            revoked_at: None,
        }
    }

    fn service(
        users: MockUserRepository,
        sessions: MockRefreshTokenRepository,
        authenticator: Arc<Authenticator>,
    ) -> AuthService<MockUserRepository, MockRefreshTokenRepository> {
        AuthService::new(Arc::new(users), Arc::new(sessions), authenticator)
    }

    #[tokio::test]
    async fn test_sign_in_creates_session() {
        let authenticator = authenticator();
        let user = test_user(&authenticator, "pass_word!");
        let email = user.email.clone();
        let user_for_mock = user.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .with(eq("nicola@example.com"))
            .returning(move |_| Ok(Some(user_for_mock.clone())));

        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_create()
            .withf(|_, token_hash, issued_at, expires_at| {
                // Only a fixed-length digest may reach the store, and the
                // record must expire after it is issued.
                token_hash.len() == 64 && expires_at > issued_at
            })
            .times(1)
            .returning(|user_id, token_hash, issued_at, expires_at| {
                Ok(record_from_args(user_id, token_hash, issued_at, expires_at))
            });

        let service = service(users, sessions, authenticator);

        let (signed_in, tokens) = service
            .sign_in(&email, "pass_word!")
            .await
            .expect("Sign-in failed");

        assert_eq!(signed_in.id, user.id);
        assert!(!tokens.access_token.is_empty());
        assert!(!tokens.refresh_token.is_empty());
        assert_ne!(tokens.access_token, tokens.refresh_token);
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password_creates_nothing() {
        let authenticator = authenticator();
        let user = test_user(&authenticator, "pass_word!");
        let email = user.email.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let mut sessions = MockRefreshTokenRepository::new();
        sessions.expect_create().never();

        let service = service(users, sessions, authenticator);

        let result = service.sign_in(&email, "wrong_password").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_sign_in_unknown_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let mut sessions = MockRefreshTokenRepository::new();
        sessions.expect_create().never();

        let service = service(users, sessions, authenticator());

        let email = EmailAddress::new("nobody@example.com".to_string()).unwrap();
        let result = service.sign_in(&email, "pass_word!").await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_rotates_session() {
        let authenticator = authenticator();
        let user_id = UserId::new();
        let minted = authenticator.mint_session(&user_id.to_string()).unwrap();

        let stored = RefreshTokenRecord {
            id: RefreshTokenId::new(),
            user_id,
            token_hash: minted.refresh_token_hash.clone(),
            issued_at: minted.issued_at,
            expires_at: minted.refresh_expires_at,
            revoked: false,
            revoked_at: None,
        };
        let stored_id = stored.id;

        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_find_active_by_user()
            .with(eq(user_id))
            .returning(move |_| Ok(stored.clone()));
        sessions
            .expect_rotate()
            .withf(move |revoke_id, rotate_user_id, token_hash, issued_at, expires_at| {
                *revoke_id == stored_id
                    && *rotate_user_id == user_id
                    && token_hash.len() == 64
                    && expires_at > issued_at
            })
            .times(1)
            .returning(|_, user_id, token_hash, issued_at, expires_at| {
                Ok(record_from_args(user_id, token_hash, issued_at, expires_at))
            });

        let service = service(MockUserRepository::new(), sessions, authenticator);

        let tokens = service
            .refresh(&minted.refresh_token)
            .await
            .expect("Refresh failed");

        assert!(!tokens.access_token.is_empty());
        assert!(!tokens.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_rejects_garbage_token() {
        let mut sessions = MockRefreshTokenRepository::new();
        sessions.expect_find_active_by_user().never();
        sessions.expect_rotate().never();

        let service = service(MockUserRepository::new(), sessions, authenticator());

        let result = service.refresh("not.a.token").await;
        assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_refresh_rejects_digest_mismatch() {
        let authenticator = authenticator();
        let user_id = UserId::new();
        let minted = authenticator.mint_session(&user_id.to_string()).unwrap();

        // An active session exists, but its digest belongs to a different
        // refresh token; presenting this one must not rotate anything.
        let stored = RefreshTokenRecord {
            id: RefreshTokenId::new(),
            user_id,
            token_hash: "b".repeat(64),
            issued_at: minted.issued_at,
            expires_at: minted.refresh_expires_at,
            revoked: false,
            revoked_at: None,
        };

        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_find_active_by_user()
            .returning(move |_| Ok(stored.clone()));
        sessions.expect_rotate().never();

        let service = service(MockUserRepository::new(), sessions, authenticator);

        let result = service.refresh(&minted.refresh_token).await;
        assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_refresh_rejects_without_active_session() {
        let authenticator = authenticator();
        let user_id = UserId::new();
        let minted = authenticator.mint_session(&user_id.to_string()).unwrap();

        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_find_active_by_user()
            .returning(|_| Err(SessionError::NotFound));
        sessions.expect_rotate().never();

        let service = service(MockUserRepository::new(), sessions, authenticator);

        let result = service.refresh(&minted.refresh_token).await;
        assert!(matches!(result, Err(AuthError::InvalidRefreshToken)));
    }

    #[tokio::test]
    async fn test_sign_out_revokes_active_session() {
        let user_id = UserId::new();
        let record = RefreshTokenRecord {
            id: RefreshTokenId::new(),
            user_id,
            token_hash: "a".repeat(64),
            issued_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(24),
            revoked: false,
            revoked_at: None,
        };
        let record_id = record.id;

        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_find_active_by_user()
            .returning(move |_| Ok(record.clone()));
        sessions
            .expect_revoke()
            .with(eq(record_id))
            .times(1)
            .returning(|_| Ok(()));

        let service = service(MockUserRepository::new(), sessions, authenticator());

        service.sign_out(&user_id).await.expect("Sign-out failed");
    }

    #[tokio::test]
    async fn test_sign_out_without_session_is_noop() {
        let mut sessions = MockRefreshTokenRepository::new();
        sessions
            .expect_find_active_by_user()
            .returning(|_| Err(SessionError::NotFound));
        sessions.expect_revoke().never();

        let service = service(MockUserRepository::new(), sessions, authenticator());

        service
            .sign_out(&UserId::new())
            .await
            .expect("Sign-out should be a no-op");
    }
}
