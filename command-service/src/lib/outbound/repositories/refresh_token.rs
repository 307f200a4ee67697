use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::RefreshTokenId;
use crate::domain::session::models::RefreshTokenRecord;
use crate::domain::session::ports::RefreshTokenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresRefreshTokenRepository {
    pool: PgPool,
}

impl PostgresRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RefreshTokenRow {
    id: Uuid,
    user_id: Uuid,
    token_hash: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revoked: bool,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<RefreshTokenRow> for RefreshTokenRecord {
    fn from(row: RefreshTokenRow) -> Self {
        Self {
            id: RefreshTokenId(row.id),
            user_id: UserId(row.user_id),
            token_hash: row.token_hash,
            issued_at: row.issued_at,
            expires_at: row.expires_at,
            revoked: row.revoked,
            revoked_at: row.revoked_at,
        }
    }
}

#[async_trait]
impl RefreshTokenRepository for PostgresRefreshTokenRepository {
    async fn create(
        &self,
        user_id: &UserId,
        token_hash: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, SessionError> {
        let id = RefreshTokenId::new();

        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, issued_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .bind(token_hash)
        .bind(issued_at)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(RefreshTokenRecord {
            id,
            user_id: *user_id,
            token_hash: token_hash.to_string(),
            issued_at,
            expires_at,
            revoked: false,
            revoked_at: None,
        })
    }

    async fn find_active_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<RefreshTokenRecord, SessionError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT id, user_id, token_hash, issued_at, expires_at, revoked, revoked_at
            FROM refresh_tokens
            WHERE user_id = $1 AND revoked = FALSE AND expires_at > NOW()
            ORDER BY issued_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        row.map(RefreshTokenRecord::from)
            .ok_or(SessionError::NotFound)
    }

    async fn revoke(&self, id: &RefreshTokenId) -> Result<(), SessionError> {
        // Touches only live records: revoking twice neither errors nor
        // rewrites revoked_at.
        sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked = TRUE, revoked_at = NOW()
            WHERE id = $1 AND revoked = FALSE
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn rotate(
        &self,
        revoke_id: &RefreshTokenId,
        user_id: &UserId,
        token_hash: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshTokenRecord, SessionError> {
        let id = RefreshTokenId::new();

        // One transaction: a crash between the two statements must not
        // leave the user with zero or two live sessions from this rotation.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked = TRUE, revoked_at = NOW()
            WHERE id = $1 AND revoked = FALSE
            "#,
        )
        .bind(revoke_id.0)
        .execute(&mut *tx)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (id, user_id, token_hash, issued_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .bind(token_hash)
        .bind(issued_at)
        .bind(expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(RefreshTokenRecord {
            id,
            user_id: *user_id,
            token_hash: token_hash.to_string(),
            issued_at,
            expires_at,
            revoked: false,
            revoked_at: None,
        })
    }

    async fn sweep_expired(&self) -> Result<u64, SessionError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| SessionError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
