use axum::extract::Path;
use axum::Json;

use crate::valuation::{self, RarityTier, TIERS};

use super::ApiResponse;

/// GET /api/rarity: the tier table
pub async fn tiers() -> Json<ApiResponse<Vec<RarityTier>>> {
    ApiResponse::ok(TIERS.to_vec())
}

/// GET /api/rarity/{score}: classify a hype score (clamped to 0..=100)
pub async fn classify(Path(score): Path<i32>) -> Json<ApiResponse<RarityTier>> {
    ApiResponse::ok(valuation::classify(score))
}
