//! Order relay request handling
//!
//! Serverless-style entry point: an [`HttpEvent`] comes in, an
//! [`HttpResponse`] goes out. The gateway adapts real HTTP requests into
//! events, so both surfaces share this code path.
//!
//! ```text
//! OPTIONS ─▶ CORS preflight (200, empty body)
//! POST    ─▶ decode body ─▶ OrderSubmission ─▶ render ─▶ credentials ─▶ deliver
//! other   ─▶ 405
//! ```

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info, warn};

use crate::config::SmtpConfig;
use crate::error::RelayError;
use crate::mailer::{OrderMailer, OutgoingMail};
use crate::order::OrderSubmission;
use crate::render::render_order;

pub const SUCCESS_MESSAGE: &str = "Order sent successfully";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Inbound HTTP event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    /// Defaults to `GET` when absent
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HttpEvent {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            body,
            ..Self::default()
        }
    }

    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("GET")
    }

    /// Request body as JSON text; absent or blank bodies become `{}`.
    ///
    /// A base64 body must decode to UTF-8.
    fn json_body(&self) -> Result<String, RelayError> {
        let raw = match &self.body {
            Some(body) if self.is_base64_encoded => {
                String::from_utf8(BASE64.decode(body.trim())?)?
            }
            Some(body) => body.clone(),
            None => String::new(),
        };
        if raw.trim().is_empty() {
            Ok("{}".to_string())
        } else {
            Ok(raw)
        }
    }
}

/// Outbound HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    /// CORS preflight answer.
    pub fn preflight() -> Self {
        let headers = [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "POST, OPTIONS"),
            ("Access-Control-Allow-Headers", "Content-Type"),
            ("Access-Control-Max-Age", "86400"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON response with the CORS origin header.
    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        let headers = [
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", "*"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            status_code,
            headers,
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &json!({ "error": message }))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl From<&RelayError> for HttpResponse {
    fn from(err: &RelayError) -> Self {
        HttpResponse::error(err.status_code(), err.public_message())
    }
}

/// Handle one event.
///
/// Never fails: every [`RelayError`] is logged and turned into a JSON
/// error response.
pub async fn handle_event(
    event: &HttpEvent,
    smtp: &SmtpConfig,
    mailer: &dyn OrderMailer,
) -> HttpResponse {
    match event.method() {
        "OPTIONS" => HttpResponse::preflight(),
        "POST" => match submit_order(event, smtp, mailer).await {
            Ok(response) => response,
            Err(err) => {
                if err.is_client_error() {
                    warn!(error = %err, "[RELAY] Rejected order submission");
                } else {
                    error!(error = %err, mailer = mailer.name(), "[RELAY] Order submission failed");
                }
                HttpResponse::from(&err)
            }
        },
        other => {
            warn!(method = other, "[RELAY] Method not allowed");
            HttpResponse::error(405, METHOD_NOT_ALLOWED)
        }
    }
}

async fn submit_order(
    event: &HttpEvent,
    smtp: &SmtpConfig,
    mailer: &dyn OrderMailer,
) -> Result<HttpResponse, RelayError> {
    let body = event.json_body()?;
    let order = OrderSubmission::from_json(&body)?;
    let rendered = render_order(&order);

    let login = smtp.login().ok_or(RelayError::CredentialsMissing)?;

    let mail = OutgoingMail::new(smtp.from_email.clone(), rendered);
    mailer.deliver(&login, &mail).await?;

    info!(
        name = %order.name,
        material = %order.material,
        quantity = order.quantity,
        total_price = order.total_price.as_str(),
        "[RELAY] Order mail sent"
    );
    Ok(HttpResponse::json(
        200,
        &json!({ "success": true, "message": SUCCESS_MESSAGE }),
    ))
}
