//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: service wiring over the injected user directory
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses
//! - `uploads.rs`: startup-time upload directory preparation

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use recipeshare_users::UserDirectory;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod uploads;

/// Startup configuration, resolved by `main` (or the test harness).
pub struct AppConfig {
    pub jwt_secret: String,
    pub upload_root: PathBuf,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The user directory is injected so deployments can wire a durable adapter
/// and tests can seed records; this API has no write endpoints of its own.
pub async fn build_app(config: AppConfig, directory: Arc<dyn UserDirectory>) -> Router {
    let jwt = Arc::new(recipeshare_auth::Hs256JwtValidator::new(
        config.jwt_secret.into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    uploads::prepare_upload_root(&config.upload_root)
        .expect("failed to prepare upload directory");

    let services = Arc::new(services::build_services(directory));

    // Protected routes: require an authenticated principal.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest_service("/upload", ServeDir::new(&config.upload_root))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
