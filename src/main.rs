//! Order Mail Relay - gateway binary
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  HTTP    │───▶│  Relay   │───▶│  Render  │───▶│   SMTP   │
//! │ (axum)   │    │ (event)  │    │(txt+html)│    │ (SMTPS)  │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `order_mail_relay [--env dev] [--port 8080]`
//!
//! App settings come from `config/{env}.yaml`, SMTP settings from the
//! `SMTP_*` environment variables.

use std::sync::Arc;

use anyhow::Context;

use order_mail_relay::config::{AppConfig, SmtpConfig};
use order_mail_relay::gateway::{self, state::AppState};
use order_mail_relay::logging::init_logging;
use order_mail_relay::mailer::SmtpMailer;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config =
        AppConfig::load(&env).with_context(|| format!("loading config for env {}", env))?;
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting order mail relay in {} mode", env);

    let smtp = SmtpConfig::from_env().context("reading SMTP_* environment")?;
    if smtp.login().is_none() {
        tracing::warn!("SMTP_USER / SMTP_PASSWORD not set; order submissions will be rejected");
    }
    tracing::info!(
        host = %smtp.host,
        port = smtp.port,
        from = %smtp.from_email,
        "SMTP relay configured"
    );

    let mailer = Arc::new(SmtpMailer::from_config(&smtp));
    let state = Arc::new(AppState::new(smtp, mailer));

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    gateway::run_server(&app_config.gateway.host, port, state)
        .await
        .context("gateway server error")?;

    tracing::info!("Order mail relay stopped");
    Ok(())
}
