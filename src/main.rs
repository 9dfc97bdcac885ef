//! Skill Aid backend server binary.
//!
//! Composition root: loads configuration, connects the database, wires the
//! real adapters into the router, and serves.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use skillaid_backend::adapters::auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
use skillaid_backend::adapters::email::ResendMailer;
use skillaid_backend::adapters::http::{api_router, AppState};
use skillaid_backend::adapters::postgres::{
    PostgresBlogRepository, PostgresMediaRepository, PostgresPageContentRepository,
    PostgresPlanRepository, PostgresUserRepository, PostgresVideoRepository,
};
use skillaid_backend::adapters::storage::LocalFileStorage;
use skillaid_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        plans: Arc::new(PostgresPlanRepository::new(pool.clone())),
        blog: Arc::new(PostgresBlogRepository::new(pool.clone())),
        media: Arc::new(PostgresMediaRepository::new(pool.clone())),
        videos: Arc::new(PostgresVideoRepository::new(pool.clone())),
        pages: Arc::new(PostgresPageContentRepository::new(pool)),
        hasher: Arc::new(Argon2PasswordHasher::new()),
        tokens: Arc::new(JwtTokenService::new(JwtConfig::new(
            config.auth.jwt_secret.expose_secret().clone(),
            config.auth.token_ttl(),
        ))),
        mailer: Arc::new(ResendMailer::new(config.email.clone())),
        storage: Arc::new(LocalFileStorage::new(
            config.uploads.dir_path(),
            config.uploads.url_prefix.clone(),
        )),
    };

    let cors = if config.is_production() {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(
                config
                    .server
                    .cors_origins_list()
                    .iter()
                    .filter_map(|o| o.parse().ok()),
            ))
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Server running");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
