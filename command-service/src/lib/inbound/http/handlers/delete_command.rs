use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::command::errors::CommandError;
use crate::domain::command::models::CommandId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_command(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(command_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let command_id = CommandId::from_string(&command_id).map_err(CommandError::from)?;

    state
        .command_service
        .delete_command(&principal.user_id, &command_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
