use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

/// GET /health: catalog database ping plus local profile status.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let catalog_ok = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();
    let profile = state.profiles.snapshot().await;

    let (status, health, catalog) = if catalog_ok {
        (StatusCode::OK, "healthy", "connected")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "disconnected")
    };

    let body = json!({
        "status": health,
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": catalog,
        "profile": {
            "username": profile.username,
            "owned": profile.owned.len(),
            "wishlist": profile.wishlist.len(),
        },
    });
    (status, Json(body))
}
