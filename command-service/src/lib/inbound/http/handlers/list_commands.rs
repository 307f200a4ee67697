use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_command::CommandData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_commands(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<CommandData>>, ApiError> {
    state
        .command_service
        .list_commands(&principal.user_id)
        .await
        .map_err(ApiError::from)
        .map(|commands| {
            ApiSuccess::new(
                StatusCode::OK,
                commands.iter().map(CommandData::from).collect(),
            )
        })
}

pub async fn list_commands_with_tag(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(tag_id): Path<String>,
) -> Result<ApiSuccess<Vec<CommandData>>, ApiError> {
    let tag_id = TagId::from_string(&tag_id).map_err(TagError::from)?;

    state
        .command_service
        .list_commands_with_tag(&principal.user_id, &tag_id)
        .await
        .map_err(ApiError::from)
        .map(|commands| {
            ApiSuccess::new(
                StatusCode::OK,
                commands.iter().map(CommandData::from).collect(),
            )
        })
}
