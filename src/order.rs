//! Order submission types
//!
//! - [`OrderPayload`]: raw JSON deserialization, every field optional
//! - [`OrderSubmission`]: payload with defaults applied, ready for rendering
//!
//! No business validation happens here. Missing fields and JSON `null`
//! fall back to defaults; only a type mismatch (e.g. `"quantity": "two"`)
//! is rejected.

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::{group_literal, is_plain_decimal};

// ============================================================================
// Lenient scalar types
// ============================================================================

/// Value the client may send either as a JSON string or a JSON number.
///
/// Rendered exactly as received: `6` stays `6`, `"6.5"` stays `6.5`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl Default for TextOrNumber {
    fn default() -> Self {
        TextOrNumber::Text(String::new())
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Text(s) => f.write_str(s),
            TextOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Price accepted as a JSON number or a numeric string.
///
/// Kept as the literal the client sent (`5000.0` stays `5000.0`) so that
/// totals outside the [`Decimal`] range still render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(String);

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self(value.to_string())
    }

    /// Literal as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact value, when the literal fits a [`Decimal`].
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.0).ok()
    }

    /// Literal with `,` thousands grouping.
    pub fn grouped(&self) -> String {
        group_literal(&self.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PriceVisitor;

        impl<'de> Visitor<'de> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Ok(Price(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                Ok(Price(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                serde_json::Number::from_f64(v)
                    .map(|n| Price(n.to_string()))
                    .ok_or_else(|| E::custom(format!("Invalid price: {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                let v = v.trim();
                if is_plain_decimal(v) {
                    Ok(Price(v.to_string()))
                } else {
                    Err(E::custom(format!("Invalid price: {:?}", v)))
                }
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// ============================================================================
// Payload -> Submission
// ============================================================================

/// Order as posted by the calculator form.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub area: Option<TextOrNumber>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub eyelets: Option<bool>,
    #[serde(default)]
    pub eyelets_count: Option<i64>,
    #[serde(default)]
    pub total_price: Option<Price>,
}

/// Banner order with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub name: String,
    pub phone: String,
    /// `None` when absent or empty
    pub email: Option<String>,
    /// `None` when absent or empty
    pub comment: Option<String>,
    pub material: String,
    /// Human-readable dimensions, e.g. `3x2`
    pub size: String,
    /// Square meters
    pub area: TextOrNumber,
    pub quantity: i64,
    pub eyelets: bool,
    /// Only shown when `eyelets` is set
    pub eyelets_count: i64,
    pub total_price: Price,
}

impl Default for OrderSubmission {
    fn default() -> Self {
        OrderPayload::default().into()
    }
}

impl From<OrderPayload> for OrderSubmission {
    fn from(p: OrderPayload) -> Self {
        Self {
            name: p.name.unwrap_or_default(),
            phone: p.phone.unwrap_or_default(),
            email: p.email.filter(|s| !s.is_empty()),
            comment: p.comment.filter(|s| !s.is_empty()),
            material: p.material.unwrap_or_default(),
            size: p.size.unwrap_or_default(),
            area: p.area.unwrap_or_default(),
            quantity: p.quantity.unwrap_or(1),
            eyelets: p.eyelets.unwrap_or(false),
            eyelets_count: p.eyelets_count.unwrap_or(0),
            total_price: p.total_price.unwrap_or_default(),
        }
    }
}

impl OrderSubmission {
    /// Parse a JSON document into a submission.
    ///
    /// `null` is treated as an empty object; any other non-object is rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error;

        let payload = match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::Null => OrderPayload::default(),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)?,
            _ => {
                return Err(serde_json::Error::custom(
                    "order body must be a JSON object",
                ));
            }
        };
        Ok(payload.into())
    }
}
