use std::sync::Arc;

use crate::config::SmtpConfig;
use crate::mailer::OrderMailer;

/// Gateway shared state (read-only after startup)
#[derive(Clone)]
pub struct AppState {
    /// SMTP settings from the environment
    pub smtp: Arc<SmtpConfig>,
    /// Delivery backend
    pub mailer: Arc<dyn OrderMailer>,
}

impl AppState {
    pub fn new(smtp: SmtpConfig, mailer: Arc<dyn OrderMailer>) -> Self {
        Self {
            smtp: Arc::new(smtp),
            mailer,
        }
    }
}
