use std::sync::Arc;

use chrono::Utc;

use crate::domain::command::errors::CommandError;
use crate::domain::command::models::Command;
use crate::domain::command::models::CommandId;
use crate::domain::command::models::CreateCommandCommand;
use crate::domain::command::models::UpdateCommandCommand;
use crate::domain::command::ports::CommandRepository;
use crate::domain::tag::models::TagId;
use crate::domain::user::models::UserId;

/// Domain service for saved-command operations.
pub struct CommandService<R>
where
    R: CommandRepository,
{
    repository: Arc<R>,
}

impl<R> CommandService<R>
where
    R: CommandRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_command(
        &self,
        user_id: &UserId,
        command: CreateCommandCommand,
    ) -> Result<Command, CommandError> {
        let entity = Command {
            id: CommandId::new(),
            user_id: *user_id,
            command: command.command,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.create(entity, command.tag_id).await
    }

    pub async fn list_commands(&self, user_id: &UserId) -> Result<Vec<Command>, CommandError> {
        self.repository.list_by_user(user_id).await
    }

    pub async fn list_commands_with_tag(
        &self,
        user_id: &UserId,
        tag_id: &TagId,
    ) -> Result<Vec<Command>, CommandError> {
        self.repository.list_by_tag(user_id, tag_id).await
    }

    pub async fn update_command(
        &self,
        user_id: &UserId,
        id: &CommandId,
        command: UpdateCommandCommand,
    ) -> Result<Command, CommandError> {
        self.repository.update(user_id, id, command).await
    }

    pub async fn delete_command(&self, user_id: &UserId, id: &CommandId) -> Result<(), CommandError> {
        self.repository.delete(user_id, id).await
    }
}
