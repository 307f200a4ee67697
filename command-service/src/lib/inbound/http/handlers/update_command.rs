use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::create_command::CommandData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::command::errors::CommandError;
use crate::domain::command::models::CommandId;
use crate::domain::command::models::CommandText;
use crate::domain::command::models::UpdateCommandCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_command(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(command_id): Path<String>,
    Json(body): Json<UpdateCommandRequest>,
) -> Result<ApiSuccess<CommandData>, ApiError> {
    let command_id = CommandId::from_string(&command_id).map_err(CommandError::from)?;
    let command = body.try_into_command()?;

    state
        .command_service
        .update_command(&principal.user_id, &command_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref command| ApiSuccess::new(StatusCode::OK, command.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCommandRequest {
    command: Option<String>,
    description: Option<String>,
}

impl UpdateCommandRequest {
    fn try_into_command(self) -> Result<UpdateCommandCommand, ApiError> {
        let command = self
            .command
            .map(CommandText::new)
            .transpose()
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(UpdateCommandCommand {
            command,
            description: self.description,
        })
    }
}
