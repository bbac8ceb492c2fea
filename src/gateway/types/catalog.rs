//! Catalog and quote response bodies.
//!
//! Decimal quantities are serialized as strings so no precision is lost.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::{Material, Quote};
use crate::money::format_grouped;

/// Material entry of `GET /api/v1/materials`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MaterialData {
    #[schema(example = "korea")]
    pub id: String,
    #[schema(example = "Корея")]
    pub name: String,
    /// Rubles per square meter
    #[schema(example = 235)]
    pub price_per_m2: u32,
    #[schema(example = "2-3 дня")]
    pub lead_time: String,
    pub description: String,
}

impl From<&Material> for MaterialData {
    fn from(m: &Material) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.to_string(),
            price_per_m2: m.price_per_m2,
            lead_time: m.lead_time.to_string(),
            description: m.description.to_string(),
        }
    }
}

/// Result of `POST /api/v1/quote`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuoteData {
    #[schema(example = "korea")]
    pub material: String,
    #[schema(example = "Корея")]
    pub material_name: String,
    #[schema(example = "2-3 дня")]
    pub lead_time: String,
    #[schema(example = 1)]
    pub quantity: i64,
    /// Exact area in m²
    #[schema(example = "6")]
    pub area: String,
    /// Exact total in rubles
    #[schema(example = "1410")]
    pub total_price: String,
    /// Total with `,` thousands grouping, as shown in the order mail
    #[schema(example = "1,410")]
    pub total_price_display: String,
}

impl From<&Quote> for QuoteData {
    fn from(q: &Quote) -> Self {
        Self {
            material: q.material.id.to_string(),
            material_name: q.material.name.to_string(),
            lead_time: q.material.lead_time.to_string(),
            quantity: q.quantity,
            area: q.area.normalize().to_string(),
            total_price: q.total_price.normalize().to_string(),
            total_price_display: format_grouped(q.total_price.normalize()),
        }
    }
}
