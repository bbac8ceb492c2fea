//! Banner material catalog and price quotes
//!
//! The calculator prices a banner as
//!
//! ```text
//! area        = width * height                 (m²)
//! total_price = area * price_per_m2 * quantity (руб)
//! ```
//!
//! All arithmetic is exact [`Decimal`]; overflow is an error, not a wrap.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One printable banner material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub id: &'static str,
    pub name: &'static str,
    /// Rubles per square meter
    pub price_per_m2: u32,
    pub lead_time: &'static str,
    pub description: &'static str,
}

pub static MATERIALS: [Material; 6] = [
    Material {
        id: "china",
        name: "Китай",
        price_per_m2: 170,
        lead_time: "1-2 дня",
        description: "Бюджетный вариант для временных баннеров",
    },
    Material {
        id: "korea",
        name: "Корея",
        price_per_m2: 235,
        lead_time: "2-3 дня",
        description: "Оптимальное соотношение цена-качество",
    },
    Material {
        id: "cast",
        name: "Литой",
        price_per_m2: 300,
        lead_time: "3-4 дня",
        description: "Премиум качество для долговечного использования",
    },
    Material {
        id: "blackout",
        name: "Блэкаут",
        price_per_m2: 300,
        lead_time: "3-4 дня",
        description: "Не просвечивает, идеален для двусторонней печати",
    },
    Material {
        id: "mesh",
        name: "Сетка",
        price_per_m2: 350,
        lead_time: "2-3 дня",
        description: "Для уличных баннеров с сильным ветром",
    },
    Material {
        id: "translucent",
        name: "Транслюцент",
        price_per_m2: 600,
        lead_time: "5-7 дней (под заказ)",
        description: "Светопропускающий материал для подсветки",
    },
];

/// Look up a material by its id (`korea`, `mesh`, ...).
pub fn find_material(id: &str) -> Option<&'static Material> {
    MATERIALS.iter().find(|m| m.id == id)
}

/// Quote request as posted by the calculator.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Material id
    #[schema(example = "korea")]
    pub material: String,
    /// Width in meters
    #[schema(value_type = f64, example = 3)]
    pub width: Decimal,
    /// Height in meters
    #[schema(value_type = f64, example = 2)]
    pub height: Decimal,
    /// Number of banners, defaults to 1
    #[serde(default)]
    #[schema(example = 1)]
    pub quantity: Option<i64>,
}

/// Priced banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub material: &'static Material,
    pub width: Decimal,
    pub height: Decimal,
    pub quantity: i64,
    /// m²
    pub area: Decimal,
    /// руб
    pub total_price: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: Decimal },

    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),

    #[error("Quote exceeds the supported numeric range")]
    Overflow,

    #[error("Invalid quote request: {0}")]
    InvalidRequest(String),
}

/// Price a banner order.
pub fn quote(request: &QuoteRequest) -> Result<Quote, QuoteError> {
    let material = find_material(&request.material)
        .ok_or_else(|| QuoteError::UnknownMaterial(request.material.clone()))?;

    for (field, value) in [("width", request.width), ("height", request.height)] {
        if value <= Decimal::ZERO {
            return Err(QuoteError::NonPositiveDimension { field, value });
        }
    }

    let quantity = request.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(QuoteError::InvalidQuantity(quantity));
    }

    let area = request
        .width
        .checked_mul(request.height)
        .ok_or(QuoteError::Overflow)?;
    let total_price = area
        .checked_mul(Decimal::from(material.price_per_m2))
        .and_then(|v| v.checked_mul(Decimal::from(quantity)))
        .ok_or(QuoteError::Overflow)?;

    Ok(Quote {
        material,
        width: request.width,
        height: request.height,
        quantity,
        area,
        total_price,
    })
}
