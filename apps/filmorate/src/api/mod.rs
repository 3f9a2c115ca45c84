//! # Filmorate HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET|POST|PUT /films` - List, create, replace films
//! - `GET /films/{id}` - Fetch one film
//! - `PUT|DELETE /films/{id}/like/{userId}` - Like or unlike a film
//! - `GET /films/popular?count=N` - Most-liked films (default 10)
//! - `GET|POST|PUT /users` - List, create, replace users
//! - `GET /users/{id}` - Fetch one user
//! - `PUT|DELETE /users/{id}/friends/{friendId}` - Befriend or unfriend
//! - `GET /users/{id}/friends` - Friends of a user
//! - `GET /users/{id}/friends/common/{otherId}` - Mutual friends
//! - `GET /health` - Health check
//! - `GET /status` - Record and edge counts
//!
//! ## Errors
//!
//! Validation failures and malformed bodies, path ids or query strings
//! answer `400`, unknown ids `404`, all with a body of `{"error": "<message>"}`.

mod error;
mod handlers;
mod middleware;
mod types;

pub use error::ApiError;
pub use middleware::{GlobalRateLimiter, create_rate_limiter};
pub use types::{
    ErrorResponse, FilmRequest, HealthResponse, PopularQuery, StatusResponse, UserRequest,
};

use crate::config::ServerConfig;
use crate::error::AppError;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use filmorate_core::Catalog;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted request body (256 KB).
const MAX_BODY_BYTES: usize = 256 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the catalog.
#[derive(Clone)]
pub struct AppState {
    /// The catalog, behind a single reader/writer lock.
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Create new app state around a catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from the configured origins.
///
/// - `Some("*")`: allow every origin (logged as a warning)
/// - `Some(list)`: comma-separated origins; invalid entries are skipped
/// - `None`: localhost only
fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    match origins {
        Some("*") => {
            tracing::warn!("CORS: allowing ALL origins; do not use this in production");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => {
                        tracing::info!(origin, "CORS: allowing origin");
                        Some(value)
                    }
                    Err(e) => {
                        tracing::warn!(origin, error = %e, "CORS: invalid origin");
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: no valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restricted_cors(allowed)
            }
        }
        None => build_localhost_cors(),
    }
}

fn build_localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate limiting - if `config.rate_limit > 0`
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/status", get(handlers::status_handler))
        .route(
            "/films",
            get(handlers::list_films)
                .post(handlers::create_film)
                .put(handlers::update_film),
        )
        .route("/films/popular", get(handlers::popular_films))
        .route("/films/{id}", get(handlers::get_film))
        .route(
            "/films/{id}/like/{user_id}",
            axum::routing::put(handlers::add_like).delete(handlers::remove_like),
        )
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .put(handlers::update_user),
        )
        .route("/users/{id}", get(handlers::get_user))
        .route("/users/{id}/friends", get(handlers::list_friends))
        .route(
            "/users/{id}/friends/{friend_id}",
            axum::routing::put(handlers::add_friend).delete(handlers::remove_friend),
        )
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(handlers::common_friends),
        );

    match create_rate_limiter(config.rate_limit) {
        Some(limiter) => {
            tracing::info!(rps = config.rate_limit, "Rate limiting enabled");
            router = router.layer(axum_middleware::from_fn_with_state(
                limiter,
                middleware::rate_limit_middleware,
            ));
        }
        None => tracing::info!("Rate limiting disabled"),
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer(config.cors_origins.as_deref()))
                .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &ServerConfig, catalog: Catalog) -> Result<(), AppError> {
    let router = create_router(AppState::new(catalog), config);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed on {}: {}", addr, e)))?;

    tracing::info!(%addr, "Filmorate HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))?;

    tracing::info!("Filmorate HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Cannot listen for shutdown signal"),
    }
}
