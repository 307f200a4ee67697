use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_tag::TagData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tags(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TagData>>, ApiError> {
    state
        .tag_service
        .list_tags(&principal.user_id)
        .await
        .map_err(ApiError::from)
        .map(|tags| {
            ApiSuccess::new(StatusCode::OK, tags.iter().map(TagData::from).collect())
        })
}
