use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::command::errors::CommandTextError;
use crate::domain::command::models::Command;
use crate::domain::command::models::CommandText;
use crate::domain::command::models::CreateCommandCommand;
use crate::domain::tag::errors::TagIdError;
use crate::domain::tag::models::TagId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_command(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Json(body): Json<CreateCommandRequest>,
) -> Result<ApiSuccess<CommandData>, ApiError> {
    state
        .command_service
        .create_command(&principal.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref command| ApiSuccess::new(StatusCode::CREATED, command.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommandRequest {
    command: String,
    description: Option<String>,
    tag_id: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateCommandRequestError {
    #[error("Invalid command text: {0}")]
    Text(#[from] CommandTextError),

    #[error("Invalid tag ID: {0}")]
    TagId(#[from] TagIdError),
}

impl CreateCommandRequest {
    fn try_into_command(self) -> Result<CreateCommandCommand, ParseCreateCommandRequestError> {
        let command = CommandText::new(self.command)?;
        let tag_id = self
            .tag_id
            .as_deref()
            .map(TagId::from_string)
            .transpose()?;

        Ok(CreateCommandCommand {
            command,
            description: self.description,
            tag_id,
        })
    }
}

impl From<ParseCreateCommandRequestError> for ApiError {
    fn from(err: ParseCreateCommandRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandData {
    pub id: String,
    pub command: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Command> for CommandData {
    fn from(command: &Command) -> Self {
        Self {
            id: command.id.to_string(),
            command: command.command.as_str().to_string(),
            description: command.description.clone(),
            created_at: command.created_at,
        }
    }
}
