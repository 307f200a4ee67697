use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<ApiSuccess<SignUpResponseData>, ApiError> {
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating an account (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUpRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignUpRequestError {
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),
}

impl SignUpRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseSignUpRequestError> {
        let first_name = require_non_empty(self.first_name, "first_name")?;
        let last_name = require_non_empty(self.last_name, "last_name")?;
        let email = EmailAddress::new(self.email)?;
        let password = require_non_empty(self.password, "password")?;

        Ok(CreateUserCommand::new(first_name, last_name, email, password))
    }
}

fn require_non_empty(
    value: String,
    field: &'static str,
) -> Result<String, ParseSignUpRequestError> {
    if value.trim().is_empty() {
        Err(ParseSignUpRequestError::EmptyField(field))
    } else {
        Ok(value)
    }
}

impl From<ParseSignUpRequestError> for ApiError {
    fn from(err: ParseSignUpRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpResponseData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignUpResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.as_str().to_string(),
            is_email_verified: user.is_email_verified,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first_name: &str, last_name: &str, email: &str, password: &str) -> SignUpRequest {
        SignUpRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_parse_valid_request() {
        let command = request("Nicola", "Tesla", "nicola@example.com", "pass_word!")
            .try_into_command()
            .expect("Parse failed");

        assert_eq!(command.first_name, "Nicola");
        assert_eq!(command.email.as_str(), "nicola@example.com");
    }

    #[test]
    fn test_parse_rejects_empty_first_name() {
        let result = request("  ", "Tesla", "nicola@example.com", "pass_word!").try_into_command();
        assert!(matches!(
            result,
            Err(ParseSignUpRequestError::EmptyField("first_name"))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_email() {
        let result = request("Nicola", "Tesla", "not-an-email", "pass_word!").try_into_command();
        assert!(matches!(result, Err(ParseSignUpRequestError::Email(_))));
    }
}
