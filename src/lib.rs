//! Order Mail Relay
//!
//! Receives banner order submissions over HTTP and forwards them as a
//! plain-text + HTML email over implicit-TLS SMTP. Also prices banners from
//! the material catalog.
//!
//! # Modules
//!
//! - [`catalog`] - Materials and price quotes
//! - [`order`] - Order submission payload and defaults
//! - [`money`] - Price formatting
//! - [`render`] - Subject / text / HTML rendering
//! - [`mailer`] - Delivery trait and SMTP implementation
//! - [`relay`] - Event handling (preflight, submit, 405)
//! - [`error`] - Relay error taxonomy
//! - [`config`] - YAML app config and SMTP environment config
//! - [`logging`] - tracing subscriber setup
//! - [`gateway`] - axum HTTP server

pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod mailer;
pub mod money;
pub mod order;
pub mod relay;
pub mod render;

// Convenient re-exports at crate root
pub use catalog::{MATERIALS, Material, Quote, QuoteError, QuoteRequest, find_material, quote};
pub use config::{AppConfig, ConfigError, SmtpConfig, SmtpLogin};
pub use error::RelayError;
pub use mailer::{ORDER_RECIPIENT, OrderMailer, OutgoingMail, SmtpMailer, build_message};
pub use order::{OrderPayload, OrderSubmission, Price, TextOrNumber};
pub use relay::{HttpEvent, HttpResponse, handle_event};
pub use render::{RenderedMail, render_order};
