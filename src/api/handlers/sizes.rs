use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ShoeSize, SizeBrand, SizeConversion};

use super::ApiResponse;

#[derive(Deserialize)]
pub struct ConvertQuery {
    pub size: String,
    pub brand: Option<String>,
}

/// GET /api/sizes/convert?size=&brand=: US size to UK/EU/CM
pub async fn convert(
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ApiResponse<SizeConversion>>, AppError> {
    let size = ShoeSize::parse(&query.size)?;
    let brand = match query.brand.as_deref() {
        Some(raw) if !raw.trim().is_empty() => SizeBrand::from_str(raw)?,
        _ => SizeBrand::NikeJordan,
    };

    Ok(ApiResponse::ok(size.convert(brand)))
}
