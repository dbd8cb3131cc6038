use axum::extract::{Query, State};
use axum::Json;
use metrics::counter;
use serde::{Deserialize, Serialize};

use crate::db::sneaker_repo;
use crate::errors::AppError;
use crate::models::Sneaker;
use crate::valuation::{self, ComparisonResult};
use crate::AppState;

use super::ApiResponse;

#[derive(Deserialize)]
pub struct VersusQuery {
    pub a: Option<String>,
    pub b: Option<String>,
}

#[derive(Serialize)]
pub struct VersusResponse {
    pub a: Sneaker,
    pub b: Sneaker,
    pub result: ComparisonResult,
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("query parameter `{name}` is required")))
}

/// GET /api/versus?a=&b=: head-to-head of two catalog entries
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<VersusQuery>,
) -> Result<Json<ApiResponse<VersusResponse>>, AppError> {
    let a_id = required(query.a, "a")?;
    let b_id = required(query.b, "b")?;

    let a = sneaker_repo::get_sneaker_by_id(&state.db, &a_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("sneaker {a_id} not found")))?;
    let b = if b_id == a_id {
        a.clone()
    } else {
        sneaker_repo::get_sneaker_by_id(&state.db, &b_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("sneaker {b_id} not found")))?
    };

    let result = valuation::compare(&a, &b);
    counter!("comparisons_total").increment(1);
    tracing::debug!(
        a = %a.id,
        b = %b.id,
        better_buy = ?result.better_buy,
        "Versus scored"
    );

    Ok(ApiResponse::ok(VersusResponse { a, b, result }))
}
