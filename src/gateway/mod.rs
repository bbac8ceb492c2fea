pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Json, Router,
    routing::{any, get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;

use state::AppState;

/// GET /api-docs/openapi.json
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Build the gateway router.
///
/// The order routes accept every method; the relay answers OPTIONS itself
/// and rejects everything but POST.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/send-order", any(handlers::send_order))
        .route("/api/v1/send-order", any(handlers::send_order))
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/materials", get(handlers::list_materials))
        .route("/api/v1/quote", post(handlers::create_quote))
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
}

/// Start HTTP Gateway server
///
/// Runs until Ctrl-C.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> std::io::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.inspect_err(|e| {
        tracing::error!(
            "[GATEWAY] Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            port
        );
    })?;

    tracing::info!("[GATEWAY] Listening on http://{}", addr);
    tracing::info!("[GATEWAY] Order endpoint: http://{}/send-order", addr);
    tracing::info!("[GATEWAY] Quote endpoint: http://{}/api/v1/quote", addr);
    tracing::info!("[GATEWAY] API Docs: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("[GATEWAY] Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("[GATEWAY] Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SmtpConfig, SmtpLogin};
    use crate::error::RelayError;
    use crate::mailer::{OrderMailer, OutgoingMail};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    #[async_trait]
    impl OrderMailer for RecordingMailer {
        fn name(&self) -> &'static str {
            "Recording"
        }

        async fn deliver(&self, _login: &SmtpLogin, mail: &OutgoingMail) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(mail.clone());
            Ok(())
        }
    }

    fn app(smtp: SmtpConfig) -> (Router, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        let state = Arc::new(AppState::new(smtp, mailer.clone()));
        (build_router(state), mailer)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_order_over_http() {
        let (app, mailer) = app(SmtpConfig::default().with_credentials("bot", "secret"));

        let body = serde_json::json!({
            "name": "Ivan",
            "material": "Oxford 440",
            "size": "2x3",
            "area": 6,
            "total_price": 5000
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-order")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": true, "message": "Order sent successfully"})
        );

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].html.contains("2x3 (6 м²)"));
    }

    #[tokio::test]
    async fn test_options_preflight_over_http() {
        let (app, mailer) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/v1/send-order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-methods").unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            response.headers().get("access-control-max-age").unwrap(),
            "86400"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_order_endpoint_not_allowed() {
        let (app, _) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/send-order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Method not allowed"})
        );
    }

    #[tokio::test]
    async fn test_missing_credentials_over_http() {
        let (app, mailer) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-order")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "SMTP credentials not configured"})
        );
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_utf8_body_is_bad_request() {
        let (app, mailer) = app(SmtpConfig::default().with_credentials("bot", "secret"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/send-order")
                    .header("content-type", "application/json")
                    .body(Body::from(&b"{\"name\": \"Iv\xff\xfean\"}"[..]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid request body"})
        );
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_materials_listed() {
        let (app, _) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/materials")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["code"], 0);
        let ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap())
            .collect();
        assert_eq!(
            ids,
            ["china", "korea", "cast", "blackout", "mesh", "translucent"]
        );
    }

    #[tokio::test]
    async fn test_quote_over_http() {
        let (app, mailer) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/quote")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"material": "korea", "width": 3, "height": 2, "quantity": 2}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["area"], "6");
        assert_eq!(json["data"]["total_price"], "2820");
        assert_eq!(json["data"]["total_price_display"], "2,820");
        assert_eq!(json["data"]["lead_time"], "2-3 дня");
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quote_errors_over_http() {
        let cases = [
            (r#"{"material": "silk", "width": 3, "height": 2}"#, StatusCode::NOT_FOUND, 4001),
            (r#"{"material": "korea", "width": 0, "height": 2}"#, StatusCode::BAD_REQUEST, 1001),
            (r#"{"material": "korea"}"#, StatusCode::BAD_REQUEST, 1001),
        ];
        for (body, status, code) in cases {
            let (app, _) = app(SmtpConfig::default());
            let response = app
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/v1/quote")
                        .header("content-type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), status, "body {}", body);
            let json = body_json(response).await;
            assert_eq!(json["code"], code, "body {}", body);
            assert!(json.get("data").is_none());
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["code"], 0);
        assert!(json["data"]["timestamp_ms"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (app, _) = app(SmtpConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["paths"]["/send-order"].is_object());
    }
}
