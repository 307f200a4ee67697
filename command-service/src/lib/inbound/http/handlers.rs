use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::command::errors::CommandError;
use crate::domain::session::errors::AuthError;
use crate::domain::tag::errors::TagError;
use crate::domain::user::errors::UserError;

pub mod create_command;
pub mod create_tag;
pub mod delete_command;
pub mod delete_tag;
pub mod list_commands;
pub mod list_tags;
pub mod me;
pub mod refresh_session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod update_command;
pub mod update_tag;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidEmail(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Hash(_) | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::InternalServerError("Something went wrong".to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            // Every refresh-path failure looks the same from outside.
            AuthError::InvalidRefreshToken => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            AuthError::User(e) => ApiError::from(e),
            AuthError::Hash(_) | AuthError::Token(_) | AuthError::Session(_) => {
                tracing::error!(error = %err, "Authentication flow failed");
                ApiError::InternalServerError("Something went wrong".to_string())
            }
        }
    }
}

impl From<TagError> for ApiError {
    fn from(err: TagError) -> Self {
        match err {
            TagError::NotFound(_) => ApiError::NotFound(err.to_string()),
            TagError::NameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            TagError::InvalidTagId(_) | TagError::InvalidName(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            TagError::DatabaseError(_) => {
                tracing::error!(error = %err, "Tag operation failed");
                ApiError::InternalServerError("Something went wrong".to_string())
            }
        }
    }
}

impl From<CommandError> for ApiError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CommandError::TagNotFound(_) => ApiError::Conflict(err.to_string()),
            CommandError::InvalidCommandId(_) | CommandError::InvalidText(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CommandError::DatabaseError(_) => {
                tracing::error!(error = %err, "Command operation failed");
                ApiError::InternalServerError("Something went wrong".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
