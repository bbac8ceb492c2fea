//! Order submission endpoint
//!
//! Adapts an axum request into an [`HttpEvent`], runs the relay and maps
//! the [`HttpResponse`] back. Every method is routed here so that OPTIONS
//! and 405 answers come from the relay itself.

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::Response,
};

use crate::relay::{HttpEvent, HttpResponse, handle_event};

use super::super::state::AppState;
use super::super::types::{OrderErrorBody, OrderRequestSchema, OrderSentBody};

/// Submit a banner order
///
/// ANY /send-order
#[utoipa::path(
    post,
    path = "/send-order",
    request_body(content = OrderRequestSchema, description = "Banner order", content_type = "application/json"),
    responses(
        (status = 200, description = "Order mail sent", body = OrderSentBody),
        (status = 400, description = "Malformed JSON body", body = OrderErrorBody),
        (status = 405, description = "Method not allowed", body = OrderErrorBody),
        (status = 500, description = "SMTP credentials not configured", body = OrderErrorBody),
        (status = 502, description = "SMTP delivery failed", body = OrderErrorBody)
    ),
    tag = "Orders"
)]
pub async fn send_order(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = to_event(&method, &headers, &body);
    tracing::debug!(method = %method, body_len = body.len(), "[GATEWAY] Order endpoint hit");

    let response = handle_event(&event, &state.smtp, state.mailer.as_ref()).await;
    into_axum_response(response)
}

pub(crate) fn to_event(method: &Method, headers: &HeaderMap, body: &Bytes) -> HttpEvent {
    let headers: BTreeMap<String, String> = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();

    // Bytes that are not UTF-8 travel base64-encoded so the relay rejects them.
    let (body, is_base64_encoded) = if body.is_empty() {
        (None, false)
    } else {
        match std::str::from_utf8(body) {
            Ok(text) => (Some(text.to_string()), false),
            Err(_) => (Some(BASE64.encode(body)), true),
        }
    };

    HttpEvent {
        http_method: Some(method.as_str().to_string()),
        headers,
        body,
        is_base64_encoded,
    }
}

pub(crate) fn into_axum_response(response: HttpResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut out = Response::new(Body::from(response.body));
    *out.status_mut() = status;
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                out.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "[GATEWAY] Dropping invalid response header"),
        }
    }
    out
}
