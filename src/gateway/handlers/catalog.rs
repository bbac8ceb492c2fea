//! Price calculator handlers (materials, quote)

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::catalog::{MATERIALS, QuoteError, QuoteRequest, quote};

use super::super::types::{ApiResponse, MaterialData, QuoteData, error_codes};

impl QuoteError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            QuoteError::UnknownMaterial(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            QuoteError::UnknownMaterial(_) => error_codes::MATERIAL_NOT_FOUND,
            _ => error_codes::INVALID_PARAMETER,
        }
    }
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::error(self.code(), self.to_string());
        (self.http_status(), Json(body)).into_response()
    }
}

/// List banner materials
///
/// GET /api/v1/materials
#[utoipa::path(
    get,
    path = "/api/v1/materials",
    responses(
        (status = 200, description = "Material catalog", body = Vec<MaterialData>, content_type = "application/json")
    ),
    tag = "Calculator"
)]
pub async fn list_materials() -> (StatusCode, Json<ApiResponse<Vec<MaterialData>>>) {
    let materials = MATERIALS.iter().map(MaterialData::from).collect();
    (StatusCode::OK, Json(ApiResponse::success(materials)))
}

/// Price a banner
///
/// POST /api/v1/quote
#[utoipa::path(
    post,
    path = "/api/v1/quote",
    request_body(content = QuoteRequest, description = "Material, size in meters and quantity", content_type = "application/json"),
    responses(
        (status = 200, description = "Computed area and total", body = QuoteData),
        (status = 400, description = "Invalid size, quantity or body"),
        (status = 404, description = "Unknown material")
    ),
    tag = "Calculator"
)]
pub async fn create_quote(
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<QuoteData>>), QuoteError> {
    let Json(request) = payload.map_err(|e| QuoteError::InvalidRequest(e.body_text()))?;
    let priced = quote(&request)?;

    tracing::debug!(
        material = priced.material.id,
        area = %priced.area,
        total_price = %priced.total_price,
        "[GATEWAY] Quote computed"
    );
    Ok((StatusCode::OK, Json(ApiResponse::success(QuoteData::from(&priced)))))
}
