use std::sync::Arc;
use std::time::Duration as StdDuration;

use auth::Authenticator;
use auth::SigningKeyPair;
use auth::TokenHandler;
use auth::TokenSettings;
use chrono::Duration;
use command_service::config::Config;
use command_service::domain::command::service::CommandService;
use command_service::domain::session::service::AuthService;
use command_service::domain::tag::service::TagService;
use command_service::domain::user::service::UserService;
use command_service::inbound::http::router::create_router;
use command_service::inbound::http::router::AppState;
use command_service::outbound::repositories::PostgresCommandRepository;
use command_service::outbound::repositories::PostgresRefreshTokenRepository;
use command_service::outbound::repositories::PostgresTagRepository;
use command_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "command_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "command-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        issuer = %config.auth.issuer,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(StdDuration::from_secs(5))
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // Without key material the service must not accept any authenticated
    // traffic; failing here aborts startup.
    let keys = SigningKeyPair::from_pem_files(
        &config.auth.private_key_path,
        &config.auth.public_key_path,
    )?;
    tracing::info!(
        private_key_path = %config.auth.private_key_path,
        public_key_path = %config.auth.public_key_path,
        "Signing key pair loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        TokenHandler::new(keys, &config.auth.issuer),
        TokenSettings {
            audience: vec![config.auth.audience.clone()],
            access_token_ttl: Duration::minutes(config.auth.access_token_ttl_minutes),
            refresh_token_ttl: Duration::hours(config.auth.refresh_token_ttl_hours),
        },
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));
    let tag_repository = Arc::new(PostgresTagRepository::new(pg_pool.clone()));
    let command_repository = Arc::new(PostgresCommandRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        refresh_token_repository,
        Arc::clone(&authenticator),
    ));
    let tag_service = Arc::new(TagService::new(tag_repository));
    let command_service = Arc::new(CommandService::new(command_repository));

    let sweep_interval = StdDuration::from_secs(config.auth.sweep_interval_seconds);
    let sweeper = Arc::clone(&auth_service);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        loop {
            ticker.tick().await;
            match sweeper.sweep_expired_sessions().await {
                Ok(deleted) => tracing::debug!(deleted, "Expired refresh tokens swept"),
                Err(e) => tracing::error!(error = %e, "Refresh token sweep failed"),
            }
        }
    });
    tracing::info!(
        interval_seconds = config.auth.sweep_interval_seconds,
        "Refresh token sweeper started"
    );

    let state = AppState {
        user_service,
        auth_service,
        tag_service,
        command_service,
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
