//! Gateway HTTP handlers
//!
//! - [`health`]: liveness probe
//! - [`send_order`]: order submission, delegated to [`crate::relay`]
//! - [`catalog`]: material list and price quotes

pub mod catalog;
pub mod health;
pub mod send_order;

pub use catalog::{create_quote, list_materials};
pub use health::{HealthResponse, health_check};
pub use send_order::send_order;
