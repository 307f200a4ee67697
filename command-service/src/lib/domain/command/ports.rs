use async_trait::async_trait;

use crate::domain::command::errors::CommandError;
use crate::domain::command::models::Command;
use crate::domain::command::models::CommandId;
use crate::domain::command::models::UpdateCommandCommand;
use crate::domain::tag::models::TagId;
use crate::domain::user::models::UserId;

/// Persistence operations for the command aggregate.
///
/// Every operation is scoped to the owning user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRepository: Send + Sync + 'static {
    /// Persist a new command, attaching it to `tag_id` when given.
    ///
    /// The insert and the attachment happen in one transaction; a failed
    /// attach leaves no orphaned command behind.
    ///
    /// # Errors
    /// * `TagNotFound` - The tag does not exist or belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: Command, tag_id: Option<TagId>)
        -> Result<Command, CommandError>;

    /// All commands owned by the user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Command>, CommandError>;

    /// The user's commands attached to a tag.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_tag(
        &self,
        user_id: &UserId,
        tag_id: &TagId,
    ) -> Result<Vec<Command>, CommandError>;

    /// Update the user's command; absent fields keep their value.
    ///
    /// # Errors
    /// * `NotFound` - No such command for this user
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        user_id: &UserId,
        id: &CommandId,
        command: UpdateCommandCommand,
    ) -> Result<Command, CommandError>;

    /// Remove the user's command.
    ///
    /// # Errors
    /// * `NotFound` - No such command for this user
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, user_id: &UserId, id: &CommandId) -> Result<(), CommandError>;
}
