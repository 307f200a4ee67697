use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::models::TagId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_tag(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
    Path(tag_id): Path<String>,
) -> Result<ApiSuccess<()>, ApiError> {
    let tag_id = TagId::from_string(&tag_id).map_err(TagError::from)?;

    state
        .tag_service
        .delete_tag(&principal.user_id, &tag_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::NO_CONTENT, ()))
}
