//! Relay error types.
//!
//! Every failure of the submit path is a [`RelayError`]. Each variant carries
//! an HTTP status and a fixed public message; the underlying cause is only
//! logged, never returned to the caller.

use thiserror::Error;

/// Errors raised while handling an order submission.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Invalid base64 body: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("Body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("SMTP credentials not configured")]
    CredentialsMissing,

    #[error("Invalid mail address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<lettre::transport::smtp::Error> for RelayError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        RelayError::Transport(Box::new(err))
    }
}

impl RelayError {
    /// HTTP status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidBody(_) | Self::InvalidEncoding(_) | Self::InvalidUtf8(_) => 400,
            Self::CredentialsMissing | Self::InvalidAddress { .. } | Self::MessageBuild(_) => 500,
            Self::Transport(_) => 502,
        }
    }

    /// Message placed in the `{"error": ...}` response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) | Self::InvalidEncoding(_) | Self::InvalidUtf8(_) => {
                "Invalid request body"
            }
            Self::CredentialsMissing => "SMTP credentials not configured",
            Self::InvalidAddress { .. } | Self::MessageBuild(_) => "Failed to build order email",
            Self::Transport(_) => "Failed to send order email",
        }
    }

    /// True when the caller sent something unusable.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_is_bad_request() {
        let err: RelayError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "Invalid request body");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_invalid_utf8_is_bad_request() {
        let err: RelayError = String::from_utf8(vec![b'I', b'v', 0xff, 0xfe])
            .unwrap_err()
            .into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "Invalid request body");
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_credentials_missing_message() {
        let err = RelayError::CredentialsMissing;
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "SMTP credentials not configured");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_address_hides_cause() {
        let source = "not an address"
            .parse::<lettre::Address>()
            .unwrap_err();
        let err = RelayError::InvalidAddress {
            address: "not an address".to_string(),
            source,
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.public_message(), "Failed to build order email");
        assert!(err.to_string().contains("not an address"));
    }

    #[test]
    fn test_transport_is_bad_gateway() {
        let err = RelayError::Transport("connection refused".into());
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.public_message(), "Failed to send order email");
        assert!(err.to_string().contains("connection refused"));
    }
}
