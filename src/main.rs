//! Gripe Backend
//!
//! Serves random gripes to visitors, collects submissions for review, and
//! lets an administrator curate the collection. State lives in two JSON files.

mod api;
mod auth;
mod config;
mod errors;
mod ids;
mod models;
mod sanitize;
mod store;
mod views;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::Credentials;
use config::Config;
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let repo = Repository::new(&config.gripes_path, &config.submissions_path);
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gripe Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.uses_default_admin_pass() {
        tracing::warn!("ADMIN_PASS is the built-in default. Set a real password for the admin area!");
    }

    let bind_addr = config.bind_addr;
    let state = AppState::new(config);
    tracing::info!("Gripes file: {:?}", state.repo.gripes_path());
    tracing::info!("Submissions file: {:?}", state.repo.submissions_path());

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let credentials = Arc::new(Credentials::new(
        state.config.admin_user.clone(),
        state.config.admin_pass.clone(),
    ));

    // Admin routes
    let admin_routes = Router::new()
        .route("/gripes", get(api::dashboard))
        .route("/admin/gripes", post(api::add_gripe))
        .route("/admin/gripes/{id}", delete(api::delete_gripe))
        .route("/admin/submissions/{index}", delete(api::delete_submission))
        // Apply basic auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::basic_auth_layer(credentials.clone(), req, next)
        }));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(api::index))
        .route("/random-gripe", get(api::random_gripe))
        .route("/submit-a-gripe", post(api::submit_gripe))
        .route("/health", get(health_check));

    Router::new()
        .merge(admin_routes)
        .merge(public_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
