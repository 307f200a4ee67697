use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::RefreshTokenId;
use crate::domain::session::models::RefreshTokenRecord;
use crate::domain::user::models::UserId;

/// Persistence operations for refresh-token records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync + 'static {
    /// Insert a new record.
    ///
    /// Prior records for the same user stay live; concurrent sessions are
    /// allowed and only rotation or logout revokes one.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(
        &self,
        user_id: &UserId,
        token_hash: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, SessionError>;

    /// Most recent non-revoked, non-expired record for the user.
    ///
    /// # Errors
    /// * `NotFound` - No active record exists
    /// * `DatabaseError` - Database operation failed
    async fn find_active_by_user(&self, user_id: &UserId) -> Result<RefreshTokenRecord, SessionError>;

    /// Mark a record revoked.
    ///
    /// Idempotent: an already-revoked record is left untouched, its
    /// `revoked_at` included.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn revoke(&self, id: &RefreshTokenId) -> Result<(), SessionError>;

    /// Revoke `revoke_id` and insert the replacement record in a single
    /// transaction, so a crash mid-rotation cannot leave the user with
    /// zero or two live sessions.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn rotate(
        &self,
        revoke_id: &RefreshTokenId,
        user_id: &UserId,
        token_hash: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, SessionError>;

    /// Delete all records past expiry, returning the count removed.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn sweep_expired(&self) -> Result<u64, SessionError>;
}
