//! # ncnews: a news aggregator REST API
//!
//! `ncnews` serves articles, comments, topics and users from PostgreSQL over a small JSON API.
//! Clients can list and sort articles, read and post comments, vote on articles and comments,
//! create topics and articles, and delete articles and comments.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and
//! uses PostgreSQL (through SQLx) for persistence.
//!
//! A request is matched by the router built in [`build_router`], handled by one of the functions
//! in [`api::handlers`], which validates the path, query and body, calls the repositories in
//! [`db::handlers`] (one parameterized statement each), and wraps the result in its JSON envelope.
//! Any failure is an [`errors::Error`], which renders as a status code plus `{"msg": ...}`.
//! Paths and methods the router does not know answer `404 Path not found`.
//!
//! The only state shared between requests is [`AppState`]: the connection pool and the
//! configuration. Multi-step writes (posting a comment, creating an article, deleting) run their
//! existence checks and the write inside one transaction.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use ncnews::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = ncnews::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     ncnews::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await
//! }
//! ```
//!
//! ## Database Setup
//!
//! Migrations are embedded and run on startup:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::migrate::MigrateError> {
//! ncnews::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;
use crate::config::CorsOrigin;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod test;

use crate::openapi::ApiDoc;
use axum::http::HeaderValue;
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, patch},
};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{ArticleId, CommentId, TopicSlug, Username};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .db(pool)
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the ncnews database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// `0` in the config means "no limit".
fn optional_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Connect the pool and run migrations.
///
/// Every statement is logged at debug; statements slower than `slow_statement_threshold_ms` are
/// logged at warn.
#[instrument(skip_all)]
async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.database.url)?
        .log_statements(log::LevelFilter::Debug)
        .log_slow_statements(
            log::LevelFilter::Warn,
            Duration::from_millis(config.slow_statement_threshold_ms),
        );

    let settings = &config.database.pool;
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(optional_secs(settings.idle_timeout_secs))
        .max_lifetime(optional_secs(settings.max_lifetime_secs))
        .connect_with(connect_options)
        .await?;

    migrator().run(&pool).await?;
    info!("Database connected and migrations applied");

    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors_config = &config.cors;

    // A wildcard anywhere in the list allows every origin
    let allow_origin = if cors_config.allowed_origins.contains(&CorsOrigin::Wildcard) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &cors_config.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                origins.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    if let Some(max_age) = cors_config.max_age {
        cors = cors.max_age(Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Catch-all for unknown paths and for known paths requested with an unrouted method.
async fn path_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Path not found")
}

/// Build the main application router with all endpoints and middleware.
///
/// This function constructs the complete Axum router with:
/// - The news API routes under `/api`
/// - `/healthz`, the OpenAPI document and the Scalar UI
/// - Optional Prometheus metrics at `/internal/metrics`
/// - CORS and HTTP tracing middleware
/// - The `Path not found` fallback
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    use api::handlers::{articles, comments, endpoints, topics, users};

    let api_routes = Router::new()
        .route("/api", get(endpoints::get_endpoints))
        .route("/api/topics", get(topics::list_topics).post(topics::create_topic))
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user))
        .route("/api/articles", get(articles::list_articles).post(articles::create_article))
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article)
                .patch(articles::update_article_votes)
                .delete(articles::delete_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comments::update_comment_votes).delete(comments::delete_comment),
        )
        .with_state(state.clone());

    let mut router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(api_routes)
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()));

    // Add Prometheus metrics if enabled
    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router
        .method_not_allowed_fallback(path_not_found)
        .fallback(path_not_found)
        .layer(create_cors_layer(&state.config)?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// A configured server: the connection pool, the router and the config it was built from.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Connect to the database, run migrations and build the router
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting ncnews with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;
        Self::new_with_pool(config, pool)
    }

    /// Build the application over an existing pool whose migrations have already run
    pub fn new_with_pool(config: Config, pool: PgPool) -> anyhow::Result<Self> {
        let app_state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(&app_state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "ncnews listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
