use std::collections::BTreeSet;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use metrics::counter;
use serde::Serialize;
use uuid::Uuid;

use crate::db::sneaker_repo;
use crate::errors::AppError;
use crate::models::{NewPortfolioItem, PortfolioItem, UserProfile};
use crate::store::ProfileBackup;
use crate::valuation::{portfolio_holdings, summarize, HoldingValuation, PortfolioSummary};
use crate::AppState;

use super::ApiResponse;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct PortfolioView {
    pub summary: PortfolioSummary,
    pub holdings: Vec<HoldingValuation>,
}

#[derive(Serialize)]
pub struct WishlistToggle {
    pub sneaker_id: String,
    pub watching: bool,
    pub wishlist_size: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/profile
pub async fn get_profile(State(state): State<AppState>) -> Json<ApiResponse<UserProfile>> {
    ApiResponse::ok(state.profiles.snapshot().await)
}

/// GET /api/profile/summary: portfolio valuation against the live catalog
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PortfolioView>>, AppError> {
    let profile = state.profiles.snapshot().await;

    let ids: Vec<String> = profile
        .owned
        .iter()
        .map(|item| item.sneaker_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let catalog = sneaker_repo::get_sneakers_by_ids(&state.db, &ids).await?;

    let holdings = portfolio_holdings(&profile.owned, &catalog);
    let summary = summarize(&holdings);
    counter!("valuations_total").increment(holdings.len() as u64);

    let unknown = holdings.iter().filter(|h| !h.known).count();
    if unknown > 0 {
        tracing::debug!(unknown, "Portfolio holds pairs missing from the catalog");
    }

    Ok(ApiResponse::ok(PortfolioView { summary, holdings }))
}

/// POST /api/profile/wishlist/{sneaker_id}: watch / unwatch
pub async fn toggle_wishlist(
    State(state): State<AppState>,
    Path(sneaker_id): Path<String>,
) -> Result<Json<ApiResponse<WishlistToggle>>, AppError> {
    let sneaker_id = sneaker_id.trim().to_string();
    if sneaker_id.is_empty() {
        return Err(AppError::BadRequest("sneaker id is required".into()));
    }

    let watching = state.profiles.toggle_wishlist(&sneaker_id).await?;
    let wishlist_size = state.profiles.snapshot().await.wishlist.len();
    counter!("wishlist_toggles_total").increment(1);

    Ok(ApiResponse::ok(WishlistToggle {
        sneaker_id,
        watching,
        wishlist_size,
    }))
}

/// POST /api/profile/portfolio: log an acquisition
pub async fn add_item(
    State(state): State<AppState>,
    Json(body): Json<NewPortfolioItem>,
) -> Result<Json<ApiResponse<PortfolioItem>>, AppError> {
    let sneaker = sneaker_repo::get_sneaker_by_id(&state.db, &body.sneaker_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("sneaker {} not found", body.sneaker_id)))?;

    let item = body.into_item(&sneaker, Utc::now())?;
    let item = state.profiles.add_item(item).await?;
    counter!("portfolio_items_added_total").increment(1);

    Ok(ApiResponse::ok(item))
}

/// DELETE /api/profile/portfolio/{id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    if !state.profiles.remove_item(id).await? {
        return Err(AppError::NotFound(format!("portfolio item {id} not found")));
    }

    Ok(ApiResponse::ok(()))
}

/// GET /api/profile/backup: export
pub async fn export_backup(State(state): State<AppState>) -> Json<ApiResponse<ProfileBackup>> {
    ApiResponse::ok(state.profiles.export_backup().await)
}

/// POST /api/profile/backup: import, replacing the current profile
///
/// Unknown versions and holdings that break entry rules are rejected with 400.
pub async fn import_backup(
    State(state): State<AppState>,
    Json(backup): Json<ProfileBackup>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state.profiles.import_backup(backup).await?;
    Ok(ApiResponse::ok(profile))
}

/// POST /api/profile/reset: wipe local data
pub async fn reset(State(state): State<AppState>) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let profile = state.profiles.reset().await?;
    Ok(ApiResponse::ok(profile))
}
