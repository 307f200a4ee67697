use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::TagName;
use crate::domain::tag::models::UpdateTagCommand;
use crate::domain::tag::ports::TagRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTagRepository {
    pool: PgPool,
}

impl PostgresTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl TagRow {
    fn try_into_tag(self) -> Result<Tag, TagError> {
        Ok(Tag {
            id: TagId(self.id),
            user_id: UserId(self.user_id),
            name: TagName::new(self.name)?,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

fn map_tag_error(e: sqlx::Error, name: &str) -> TagError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some("tags_user_id_name_key") {
            return TagError::NameAlreadyExists(name.to_string());
        }
    }
    TagError::DatabaseError(e.to_string())
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn create(&self, tag: Tag) -> Result<Tag, TagError> {
        sqlx::query(
            r#"
            INSERT INTO tags (id, user_id, name, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(tag.id.0)
        .bind(tag.user_id.0)
        .bind(tag.name.as_str())
        .bind(&tag.description)
        .bind(tag.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_tag_error(e, tag.name.as_str()))?;

        Ok(tag)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Tag>, TagError> {
        let rows = sqlx::query_as::<_, TagRow>(
            r#"
            SELECT id, user_id, name, description, created_at
            FROM tags
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TagRow::try_into_tag).collect()
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: &TagId,
        command: UpdateTagCommand,
    ) -> Result<Tag, TagError> {
        let name = command.name.map(|n| n.as_str().to_string());

        let row = sqlx::query_as::<_, TagRow>(
            r#"
            UPDATE tags
            SET name = COALESCE($3, name), description = COALESCE($4, description)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, created_at
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .bind(&name)
        .bind(&command.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_tag_error(e, name.as_deref().unwrap_or_default()))?;

        row.ok_or_else(|| TagError::NotFound(id.to_string()))?
            .try_into_tag()
    }

    async fn delete(&self, user_id: &UserId, id: &TagId) -> Result<(), TagError> {
        let result = sqlx::query(
            r#"
            DELETE FROM tags
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| TagError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TagError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
