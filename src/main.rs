//! GearGuard Server - Maintenance Tracking System
//!
//! A Rust REST API server for equipment maintenance tracking.

use axum::{
    routing::{get, patch, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearguard_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("gearguard_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GearGuard Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/register", post(api::auth::register))
        .route("/auth/login", post(api::auth::login))
        .route("/auth/me", get(api::auth::me))
        // Teams
        .route("/teams", get(api::teams::list_teams))
        .route("/teams/:id", get(api::teams::get_team))
        // Equipment categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories/:id", get(api::categories::get_category))
        // Work centers
        .route("/work-centers", get(api::work_centers::list_work_centers))
        .route("/work-centers/:id", get(api::work_centers::get_work_center))
        // Equipment
        .route(
            "/equipment",
            get(api::equipment::list_equipment).post(api::equipment::create_equipment),
        )
        .route(
            "/equipment/critical",
            get(api::equipment::list_critical_equipment),
        )
        .route("/equipment/stats/total", get(api::equipment::total_assets))
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route(
            "/equipment/:id/status",
            patch(api::equipment::update_equipment_status),
        )
        // Maintenance requests
        .route(
            "/requests",
            get(api::requests::list_requests).post(api::requests::create_request),
        )
        .route("/requests/open", get(api::requests::open_requests))
        .route(
            "/requests/preventive",
            get(api::requests::preventive_requests),
        )
        .route("/requests/overdue", get(api::requests::overdue_requests))
        .route(
            "/requests/stage/:stage",
            get(api::requests::requests_by_stage),
        )
        .route(
            "/requests/equipment/:id",
            get(api::requests::requests_by_equipment),
        )
        .route(
            "/requests/equipment/:id/open",
            get(api::requests::open_requests_by_equipment),
        )
        .route("/requests/stats/by-team", get(api::requests::stats_by_team))
        .route(
            "/requests/stats/by-category",
            get(api::requests::stats_by_category),
        )
        .route(
            "/requests/:id",
            get(api::requests::get_request).patch(api::requests::update_request),
        )
        // Dashboard statistics
        .route("/stats/dashboard", get(api::stats::dashboard))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
