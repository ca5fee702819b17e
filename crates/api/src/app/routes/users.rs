use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use recipeshare_core::UserId;

use crate::app::{errors, services::AppServices};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/me", get(logged_in_user))
        .route("/:id", get(get_user))
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.users().list_users();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    match services.users().user_by_id(id) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Resolve the caller's own user record.
///
/// The principal comes in as an explicit request extension; the lookup
/// service never reaches into ambient state.
pub async fn logged_in_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    match services.users().logged_in_user(principal.username()) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
