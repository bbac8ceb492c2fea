//! Gateway types module
//!
//! - [`ApiResponse<T>`]: wrapper for operational endpoints
//! - [`OrderSentBody`] / [`OrderErrorBody`]: order endpoint bodies (OpenAPI schemas)
//! - [`OrderRequestSchema`]: documented shape of the order payload
//! - [`MaterialData`] / [`QuoteData`]: calculator endpoints

pub mod catalog;
pub mod order;
pub mod response;

pub use catalog::{MaterialData, QuoteData};
pub use order::OrderRequestSchema;
pub use response::{ApiResponse, OrderErrorBody, OrderSentBody, error_codes};
