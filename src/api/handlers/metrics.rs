use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use crate::metrics::record_profile_gauges;
use crate::AppState;

/// GET /metrics: Prometheus scrape, with profile gauges refreshed first.
pub async fn render(State(state): State<AppState>) -> impl IntoResponse {
    let profile = state.profiles.snapshot().await;
    record_profile_gauges(profile.owned.len(), profile.wishlist.len());

    ([(CONTENT_TYPE, "text/plain; version=0.0.4")], state.metrics_handle.render())
}
