use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through the request.
///
/// Inserted by [`authenticate`]; read-only for downstream handlers and
/// discarded with the request. Display attributes are not carried here;
/// handlers that need them fetch the user by this id.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that turns a bearer token into a trusted principal.
///
/// Terminal outcomes: missing header, malformed header, or a token failing
/// verification all reject with 401; the specific verification failure is
/// logged but never echoed, so a caller cannot probe which check failed.
/// On success the subject claim is parsed into a [`UserId`] and attached to
/// the request extensions for downstream handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(kind = %e, "Token verification failed");
        unauthorized("Invalid or expired token")
    })?;

    // A subject that does not parse is a typed failure, never a
    // zero-value principal.
    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user id");
        unauthorized("Invalid or expired token")
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized("Missing authorization header")
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        unauthorized("Invalid authorization header format")
    })?;

    // Exactly two space-separated parts with the "Bearer" scheme.
    let mut parts = auth_str.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => {
            tracing::warn!("Invalid Authorization header format");
            Err(unauthorized("Invalid authorization header format"))
        }
    }
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
