use async_trait::async_trait;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::UpdateTagCommand;
use crate::domain::user::models::UserId;

/// Persistence operations for the tag aggregate.
///
/// Every operation is scoped to the owning user; a tag belonging to
/// another tenant behaves as if it does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync + 'static {
    /// Persist a new tag.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - The user already has a tag with this name
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, tag: Tag) -> Result<Tag, TagError>;

    /// All tags owned by the user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Tag>, TagError>;

    /// Update the user's tag; absent fields keep their value.
    ///
    /// # Errors
    /// * `NotFound` - No such tag for this user
    /// * `NameAlreadyExists` - The new name collides with another tag
    /// * `DatabaseError` - Database operation failed
    async fn update(
        &self,
        user_id: &UserId,
        id: &TagId,
        command: UpdateTagCommand,
    ) -> Result<Tag, TagError>;

    /// Remove the user's tag.
    ///
    /// # Errors
    /// * `NotFound` - No such tag for this user
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, user_id: &UserId, id: &TagId) -> Result<(), TagError>;
}
