use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use metrics::counter;
use serde::{Deserialize, Serialize};

use crate::db::sneaker_repo;
use crate::errors::AppError;
use crate::models::{DropStatus, NewSneaker, Sneaker};
use crate::valuation::{classify, item_roi, ItemRoi, RarityTier};
use crate::AppState;

use super::ApiResponse;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// Catalog entry enriched for the detail screen.
#[derive(Serialize)]
pub struct SneakerDetail {
    #[serde(flatten)]
    pub sneaker: Sneaker,
    pub status: DropStatus,
    pub roi: ItemRoi,
    pub rarity: RarityTier,
    pub watching: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/sneakers: catalog, optionally filtered by drop status
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Sneaker>>>, AppError> {
    let sneakers = match query.status.as_deref() {
        None | Some("") | Some("all") => sneaker_repo::get_all_sneakers(&state.db).await?,
        Some(raw) => {
            let status = DropStatus::from_str(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown drop status: {raw}")))?;
            sneaker_repo::get_sneakers_by_status(&state.db, status, Utc::now().date_naive()).await?
        }
    };

    Ok(ApiResponse::ok(sneakers))
}

/// GET /api/sneakers/{id}: detail with ROI and rarity
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SneakerDetail>>, AppError> {
    let sneaker = sneaker_repo::get_sneaker_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("sneaker {id} not found")))?;

    let watching = state.profiles.snapshot().await.is_watching(&sneaker.id);
    counter!("valuations_total").increment(1);

    Ok(ApiResponse::ok(SneakerDetail {
        status: sneaker.drop_status(Utc::now().date_naive()),
        roi: item_roi(&sneaker),
        rarity: classify(sneaker.hype_score),
        watching,
        sneaker,
    }))
}

/// POST /api/sneakers: add a catalog entry
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSneaker>,
) -> Result<Json<ApiResponse<Sneaker>>, AppError> {
    let new = body.validate()?;
    let id = new.generate_id();
    let sneaker = sneaker_repo::insert_sneaker(&state.db, &id, &new).await?;

    counter!("catalog_mutations_total", "op" => "create").increment(1);
    tracing::info!(id = %sneaker.id, name = %sneaker.name, "Catalog entry created");

    Ok(ApiResponse::ok(sneaker))
}

/// PUT /api/sneakers/{id}: replace a catalog entry's fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NewSneaker>,
) -> Result<Json<ApiResponse<Sneaker>>, AppError> {
    let new = body.validate()?;
    let sneaker = sneaker_repo::update_sneaker(&state.db, &id, &new)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("sneaker {id} not found")))?;

    counter!("catalog_mutations_total", "op" => "update").increment(1);
    tracing::info!(id = %sneaker.id, "Catalog entry updated");

    Ok(ApiResponse::ok(sneaker))
}

/// DELETE /api/sneakers/{id}
///
/// Portfolio items pointing at the entry are left alone and value at zero.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    if !sneaker_repo::delete_sneaker(&state.db, &id).await? {
        return Err(AppError::NotFound(format!("sneaker {id} not found")));
    }

    counter!("catalog_mutations_total", "op" => "delete").increment(1);
    tracing::info!(id = %id, "Catalog entry deleted");

    Ok(ApiResponse::ok(()))
}
