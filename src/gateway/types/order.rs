//! Order payload schema for the OpenAPI document.
//!
//! Deserialization itself lives in [`crate::order`]; this type only
//! describes the accepted JSON shape. All fields are optional.

use serde::Serialize;
use utoipa::ToSchema;

/// Banner order submitted by the calculator form
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderRequestSchema {
    #[schema(example = "Иван")]
    pub name: Option<String>,
    #[schema(example = "+79001234567")]
    pub phone: Option<String>,
    /// Shown only when non-empty
    #[schema(example = "ivan@example.com")]
    pub email: Option<String>,
    /// Shown only when non-empty
    pub comment: Option<String>,
    #[schema(example = "Корея")]
    pub material: Option<String>,
    /// Human-readable dimensions
    #[schema(example = "3x2")]
    pub size: Option<String>,
    /// Square meters, string or number
    #[schema(example = "6")]
    pub area: Option<String>,
    /// Defaults to 1
    #[schema(example = 1)]
    pub quantity: Option<i64>,
    /// Defaults to false
    pub eyelets: Option<bool>,
    /// Only used when `eyelets` is true
    #[schema(example = 8)]
    pub eyelets_count: Option<i64>,
    /// Rubles, number or numeric string; defaults to 0
    #[schema(example = 1410)]
    pub total_price: Option<f64>,
}
