use std::sync::Arc;

use chrono::Utc;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::CreateTagCommand;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::UpdateTagCommand;
use crate::domain::tag::ports::TagRepository;
use crate::domain::user::models::UserId;

/// Domain service for tag operations.
pub struct TagService<R>
where
    R: TagRepository,
{
    repository: Arc<R>,
}

impl<R> TagService<R>
where
    R: TagRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_tag(
        &self,
        user_id: &UserId,
        command: CreateTagCommand,
    ) -> Result<Tag, TagError> {
        let tag = Tag {
            id: TagId::new(),
            user_id: *user_id,
            name: command.name,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.create(tag).await
    }

    pub async fn list_tags(&self, user_id: &UserId) -> Result<Vec<Tag>, TagError> {
        self.repository.list_by_user(user_id).await
    }

    pub async fn update_tag(
        &self,
        user_id: &UserId,
        id: &TagId,
        command: UpdateTagCommand,
    ) -> Result<Tag, TagError> {
        self.repository.update(user_id, id, command).await
    }

    pub async fn delete_tag(&self, user_id: &UserId, id: &TagId) -> Result<(), TagError> {
        self.repository.delete(user_id, id).await
    }
}
