use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_tag::TagData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagId;
use crate::domain::tag::models::TagName;
use crate::domain::tag::models::UpdateTagCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_tag(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(tag_id): Path<String>,
    Json(body): Json<UpdateTagRequest>,
) -> Result<ApiSuccess<TagData>, ApiError> {
    let tag_id = TagId::from_string(&tag_id).map_err(TagError::from)?;
    let command = body.try_into_command()?;

    state
        .tag_service
        .update_tag(&principal.user_id, &tag_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref tag| ApiSuccess::new(StatusCode::OK, tag.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTagRequest {
    name: Option<String>,
    description: Option<String>,
}

impl UpdateTagRequest {
    fn try_into_command(self) -> Result<UpdateTagCommand, ApiError> {
        let name = self
            .name
            .map(TagName::new)
            .transpose()
            .map_err(ApiError::from)?;

        Ok(UpdateTagCommand {
            name,
            description: self.description,
        })
    }
}
