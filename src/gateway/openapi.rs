//! OpenAPI Documentation
//!
//! Generated OpenAPI 3.0 document for the relay, served as JSON at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::catalog::QuoteRequest;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    MaterialData, OrderErrorBody, OrderRequestSchema, OrderSentBody, QuoteData,
};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Mail Relay API",
        version = "1.0.0",
        description = "Prices banners and forwards order submissions by email.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::send_order::send_order,
        crate::gateway::handlers::catalog::list_materials,
        crate::gateway::handlers::catalog::create_quote,
    ),
    components(
        schemas(
            HealthResponse,
            OrderRequestSchema,
            OrderSentBody,
            OrderErrorBody,
            MaterialData,
            QuoteRequest,
            QuoteData,
        )
    ),
    tags(
        (name = "Orders", description = "Order submission"),
        (name = "Calculator", description = "Material catalog and price quotes"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
