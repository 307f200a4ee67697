use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::command::errors::CommandError;
use crate::domain::command::models::Command;
use crate::domain::command::models::CommandId;
use crate::domain::command::models::CommandText;
use crate::domain::command::models::UpdateCommandCommand;
use crate::domain::command::ports::CommandRepository;
use crate::domain::tag::models::TagId;
use crate::domain::user::models::UserId;

pub struct PostgresCommandRepository {
    pool: PgPool,
}

impl PostgresCommandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CommandRow {
    id: Uuid,
    user_id: Uuid,
    command: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl CommandRow {
    fn try_into_command(self) -> Result<Command, CommandError> {
        Ok(Command {
            id: CommandId(self.id),
            user_id: UserId(self.user_id),
            command: CommandText::new(self.command)?,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CommandRepository for PostgresCommandRepository {
    async fn create(
        &self,
        command: Command,
        tag_id: Option<TagId>,
    ) -> Result<Command, CommandError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO commands (id, user_id, command, description, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(command.id.0)
        .bind(command.user_id.0)
        .bind(command.command.as_str())
        .bind(&command.description)
        .bind(command.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        if let Some(tag_id) = tag_id {
            // Attach only to a tag the same user owns; zero rows means the
            // tag is missing or foreign, and the transaction rolls back on
            // drop so no orphaned command survives.
            let attached = sqlx::query(
                r#"
                INSERT INTO command_tags (command_id, tag_id)
                SELECT $1, id FROM tags WHERE id = $2 AND user_id = $3
                "#,
            )
            .bind(command.id.0)
            .bind(tag_id.0)
            .bind(command.user_id.0)
            .execute(&mut *tx)
            .await
            .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

            if attached.rows_affected() == 0 {
                return Err(CommandError::TagNotFound(tag_id.to_string()));
            }
        }

        tx.commit()
            .await
            .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        Ok(command)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Command>, CommandError> {
        let rows = sqlx::query_as::<_, CommandRow>(
            r#"
            SELECT id, user_id, command, description, created_at
            FROM commands
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CommandRow::try_into_command).collect()
    }

    async fn list_by_tag(
        &self,
        user_id: &UserId,
        tag_id: &TagId,
    ) -> Result<Vec<Command>, CommandError> {
        let rows = sqlx::query_as::<_, CommandRow>(
            r#"
            SELECT c.id, c.user_id, c.command, c.description, c.created_at
            FROM commands c
            JOIN command_tags ct ON ct.command_id = c.id
            WHERE c.user_id = $1 AND ct.tag_id = $2
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(user_id.0)
        .bind(tag_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CommandRow::try_into_command).collect()
    }

    async fn update(
        &self,
        user_id: &UserId,
        id: &CommandId,
        command: UpdateCommandCommand,
    ) -> Result<Command, CommandError> {
        let text = command.command.map(|c| c.as_str().to_string());

        let row = sqlx::query_as::<_, CommandRow>(
            r#"
            UPDATE commands
            SET command = COALESCE($3, command), description = COALESCE($4, description)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, command, description, created_at
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .bind(&text)
        .bind(&command.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        row.ok_or_else(|| CommandError::NotFound(id.to_string()))?
            .try_into_command()
    }

    async fn delete(&self, user_id: &UserId, id: &CommandId) -> Result<(), CommandError> {
        let result = sqlx::query(
            r#"
            DELETE FROM commands
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommandError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommandError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
