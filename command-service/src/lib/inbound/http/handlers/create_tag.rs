use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::tag::errors::TagNameError;
use crate::domain::tag::models::CreateTagCommand;
use crate::domain::tag::models::Tag;
use crate::domain::tag::models::TagName;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_tag(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTagRequest>,
) -> Result<ApiSuccess<TagData>, ApiError> {
    state
        .tag_service
        .create_tag(&principal.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref tag| ApiSuccess::new(StatusCode::CREATED, tag.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTagRequest {
    name: String,
    description: Option<String>,
}

impl CreateTagRequest {
    fn try_into_command(self) -> Result<CreateTagCommand, TagNameError> {
        Ok(CreateTagCommand {
            name: TagName::new(self.name)?,
            description: self.description,
        })
    }
}

impl From<TagNameError> for ApiError {
    fn from(err: TagNameError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Tag> for TagData {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.as_str().to_string(),
            description: tag.description.clone(),
            created_at: tag.created_at,
        }
    }
}
