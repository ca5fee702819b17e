use std::sync::Arc;

use recipeshare_api::app::{AppConfig, build_app};
use recipeshare_infra::InMemoryUserDirectory;
use recipeshare_users::UserDirectory;

#[tokio::main]
async fn main() {
    recipeshare_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // The upload root hangs off the working directory, not an env var.
    let workdir = std::env::current_dir().expect("failed to resolve working directory");
    let upload_root = workdir.join("upload");

    // Registration is a separate write path; the process starts with an
    // empty directory and a durable adapter is swapped in at deployment.
    let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());

    let app = build_app(AppConfig { jwt_secret, upload_root }, directory).await;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
