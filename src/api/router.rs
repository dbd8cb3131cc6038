use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_auth;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Public routes, no authentication
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Protected API routes, bearer token required when API_TOKEN is set
    let protected = Router::new()
        // Catalog
        .route(
            "/api/sneakers",
            get(handlers::sneakers::list).post(handlers::sneakers::create),
        )
        .route(
            "/api/sneakers/:id",
            get(handlers::sneakers::detail)
                .put(handlers::sneakers::update)
                .delete(handlers::sneakers::remove),
        )
        // Tools
        .route("/api/versus", get(handlers::versus::compare))
        .route("/api/rarity", get(handlers::rarity::tiers))
        .route("/api/rarity/:score", get(handlers::rarity::classify))
        .route("/api/sizes/convert", get(handlers::sizes::convert))
        // Profile
        .route("/api/profile", get(handlers::profile::get_profile))
        .route("/api/profile/summary", get(handlers::profile::summary))
        .route("/api/profile/wishlist/:sneaker_id", post(handlers::profile::toggle_wishlist))
        .route("/api/profile/portfolio", post(handlers::profile::add_item))
        .route("/api/profile/portfolio/:id", delete(handlers::profile::remove_item))
        .route(
            "/api/profile/backup",
            get(handlers::profile::export_backup).post(handlers::profile::import_backup),
        )
        .route("/api/profile/reset", post(handlers::profile::reset))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
