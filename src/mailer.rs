//! Outgoing mail delivery
//!
//! [`OrderMailer`] is the seam between the relay and the SMTP server.
//! [`SmtpMailer`] is the production implementation; tests substitute a
//! recording mailer.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use crate::config::{SmtpConfig, SmtpLogin};
use crate::error::RelayError;
use crate::render::RenderedMail;

/// Destination of every order notification.
pub const ORDER_RECIPIENT: &str = "printcalc@mail.ru";

/// Fully addressed notification, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingMail {
    /// Address a rendered mail from `from` to [`ORDER_RECIPIENT`].
    pub fn new(from: impl Into<String>, rendered: RenderedMail) -> Self {
        Self {
            from: from.into(),
            to: ORDER_RECIPIENT.to_string(),
            subject: rendered.subject,
            text: rendered.text,
            html: rendered.html,
        }
    }
}

/// Mail delivery backend.
///
/// Deliveries are not idempotent: every call sends a new message.
#[async_trait]
pub trait OrderMailer: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Authenticate with `login` and send `mail`.
    async fn deliver(&self, login: &SmtpLogin, mail: &OutgoingMail) -> Result<(), RelayError>;
}

fn parse_mailbox(address: &str) -> Result<Mailbox, RelayError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| RelayError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Build a `multipart/alternative` message: plain text first, then HTML.
pub fn build_message(mail: &OutgoingMail) -> Result<Message, RelayError> {
    let message = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            mail.text.clone(),
            mail.html.clone(),
        ))?;
    Ok(message)
}

/// SMTP delivery over implicit TLS.
///
/// A transport is built per delivery and dropped afterwards, so the
/// connection never outlives one message.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    host: String,
    port: u16,
}

impl SmtpMailer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn from_config(config: &SmtpConfig) -> Self {
        Self::new(config.host.clone(), config.port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn transport(&self, login: &SmtpLogin) -> Result<AsyncSmtpTransport<Tokio1Executor>, RelayError> {
        let credentials = Credentials::new(login.user.clone(), login.password.clone());
        // `relay` wraps the socket in TLS from the first byte (SMTPS), never STARTTLS.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(credentials)
            .build();
        Ok(transport)
    }
}

#[async_trait]
impl OrderMailer for SmtpMailer {
    fn name(&self) -> &'static str {
        "SMTP"
    }

    async fn deliver(&self, login: &SmtpLogin, mail: &OutgoingMail) -> Result<(), RelayError> {
        let message = build_message(mail)?;
        let transport = self.transport(login)?;

        debug!(
            host = %self.host,
            port = self.port,
            user = %login.user,
            "Connecting to SMTP server"
        );
        let response = transport.send(message).await?;
        info!(
            host = %self.host,
            to = %mail.to,
            code = %response.code(),
            "Order mail accepted by SMTP server"
        );
        Ok(())
    }
}
