//! Realty API Server
//!
//! CRUD service for real-estate property records, with on-the-fly boundary
//! area calculation. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::PostgresPropertyRepository;
use app::PropertyService;
use config::Config;
use domain::ports::PropertyRepository;

/// Application state shared across all handlers
pub struct AppState<PR>
where
    PR: PropertyRepository,
{
    pub property_service: Arc<PropertyService<PR>>,
}

// Manual impl: deriving would require `PR: Clone`
impl<PR> Clone for AppState<PR>
where
    PR: PropertyRepository,
{
    fn clone(&self) -> Self {
        Self {
            property_service: self.property_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Read-only endpoints
pub(crate) fn read_routes<PR>() -> Router<AppState<PR>>
where
    PR: PropertyRepository + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/property", get(handlers::list_properties::<PR>))
        .route("/property/:id", get(handlers::get_property::<PR>))
        .route("/property/:id/area", get(handlers::get_property_area::<PR>))
}

/// Endpoints that change stored properties
pub(crate) fn write_routes<PR>() -> Router<AppState<PR>>
where
    PR: PropertyRepository + 'static,
{
    Router::new()
        .route("/property", post(handlers::create_property::<PR>))
        .route(
            "/property/:id",
            put(handlers::update_property::<PR>).delete(handlers::delete_property::<PR>),
        )
}

/// Attach shared middleware and state
pub(crate) fn finish<PR>(routes: Router<AppState<PR>>, state: AppState<PR>) -> Router
where
    PR: PropertyRepository + 'static,
{
    routes
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,realty_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Realty API...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        min_boundary_points = config.min_boundary_points,
        "Configuration loaded"
    );

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        entity::ensure_schema(&db)
            .await
            .context("Failed to create database schema")?;
        tracing::info!("Database schema ready");
    }

    // Create adapters and services
    let property_repo = Arc::new(PostgresPropertyRepository::new(db));
    let property_service = Arc::new(PropertyService::new(
        property_repo,
        config.min_boundary_points,
    ));

    let state = AppState { property_service };

    // Rate limiting for writes, keyed on the peer IP from the socket
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Failed to build governor config")?,
    );

    let routes = read_routes::<PostgresPropertyRepository>().merge(
        write_routes::<PostgresPropertyRepository>().layer(GovernorLayer {
            config: governor_config,
        }),
    );
    let app = finish(routes, state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
