//! API response wrapper for gateway-native endpoints
//!
//! The order endpoint answers with the relay's own `{"success": ...}` /
//! `{"error": ...}` bodies. Gateway-native endpoints (health, catalog,
//! quote) use [`ApiResponse`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unified API response wrapper
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or null (error)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Success body of the order endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderSentBody {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Order sent successfully")]
    pub message: String,
}

/// Error body of the order endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderErrorBody {
    #[schema(example = "SMTP credentials not configured")]
    pub error: String,
}

/// Error codes carried in [`ApiResponse::code`]
pub mod error_codes {
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const MATERIAL_NOT_FOUND: i32 = 4001;
}
