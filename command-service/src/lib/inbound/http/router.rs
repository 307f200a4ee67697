use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_command::create_command;
use super::handlers::create_tag::create_tag;
use super::handlers::delete_command::delete_command;
use super::handlers::delete_tag::delete_tag;
use super::handlers::list_commands::list_commands;
use super::handlers::list_commands::list_commands_with_tag;
use super::handlers::list_tags::list_tags;
use super::handlers::me::me;
use super::handlers::refresh_session::refresh_session;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_out::sign_out;
use super::handlers::sign_up::sign_up;
use super::handlers::update_command::update_command;
use super::handlers::update_tag::update_tag;
use super::middleware::authenticate as auth_middleware;
use crate::domain::command::service::CommandService;
use crate::domain::session::service::AuthService;
use crate::domain::tag::service::TagService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::PostgresCommandRepository;
use crate::outbound::repositories::PostgresRefreshTokenRepository;
use crate::outbound::repositories::PostgresTagRepository;
use crate::outbound::repositories::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub auth_service: Arc<AuthService<PostgresUserRepository, PostgresRefreshTokenRepository>>,
    pub tag_service: Arc<TagService<PostgresTagRepository>>,
    pub command_service: Arc<CommandService<PostgresCommandRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/signup", post(sign_up))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/refresh", post(refresh_session));

    let protected_routes = Router::new()
        .route("/api/auth/logout", post(sign_out))
        .route("/api/auth/me", get(me))
        .route("/api/tags", get(list_tags))
        .route("/api/tags", post(create_tag))
        .route("/api/tags/:tag_id", put(update_tag))
        .route("/api/tags/:tag_id", delete(delete_tag))
        .route("/api/commands", get(list_commands))
        .route("/api/commands", post(create_command))
        .route("/api/commands/tag/:tag_id", get(list_commands_with_tag))
        .route("/api/commands/:command_id", put(update_command))
        .route("/api/commands/:command_id", delete(delete_command))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
