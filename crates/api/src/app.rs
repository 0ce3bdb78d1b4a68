use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::{auth, event_types, health, invitations, public, templates};
use crate::services::{BlobStore, CodeNotifier, LocalBlobStore};

/// How many uploads one compose request may carry (main image, per-role
/// photos and a gallery). Bounds the multipart body size.
const MAX_UPLOADS_PER_REQUEST: usize = 12;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub notifier: CodeNotifier,
    pub blob_store: Arc<dyn BlobStore>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let notifier = CodeNotifier::new(config.email.clone());

    let blob_store: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new(
        config.uploads.dir.clone(),
        config.uploads.max_size_bytes,
    ));

    let state = AppState {
        pool,
        config: config.clone(),
        notifier,
        blob_store,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Session-holding routes. Auth is enforced per-handler by the UserAuth
    // extractor; these all reject requests without a valid access token.
    let owner_routes = Router::new()
        .route("/api/v1/event-types", get(event_types::list_event_types))
        .route("/api/v1/templates", get(templates::list_templates))
        .route("/api/v1/invitations/compose", post(invitations::compose))
        .route("/api/v1/invitations/publish", post(invitations::publish))
        .route("/api/v1/invitations", get(invitations::list))
        .route("/api/v1/invitations/:id", get(invitations::get))
        .layer(DefaultBodyLimit::max(
            config.uploads.max_size_bytes * MAX_UPLOADS_PER_REQUEST,
        ));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/verify", post(auth::verify))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/i/:share_token", get(public::view_invitation))
        .route("/api/v1/i/:share_token/rsvp", post(public::submit_rsvp))
        .route("/api/health", get(health::health_check));

    Router::new()
        .merge(owner_routes)
        .merge(public_routes)
        .nest_service("/uploads", ServeDir::new(&config.uploads.dir))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors)
        .with_state(state)
}
