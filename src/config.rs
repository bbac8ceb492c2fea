use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load `config/{env}.yaml`
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        Self::from_file(&format!("config/{}.yaml", env))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

// ============================================================================
// SMTP settings (environment)
// ============================================================================

pub const DEFAULT_FROM_EMAIL: &str = "noreply@printcalc.ru";
pub const DEFAULT_SMTP_HOST: &str = "smtp.yandex.ru";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// SMTP settings read from `SMTP_*` environment variables.
///
/// Credentials stay optional here: a missing user or password is reported
/// per request, not at startup.
#[derive(Clone)]
pub struct SmtpConfig {
    pub from_email: String,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Username and password for SMTP AUTH.
#[derive(Clone)]
pub struct SmtpLogin {
    pub user: String,
    pub password: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            user: None,
            password: None,
        }
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("from_email", &self.from_email)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl std::fmt::Debug for SmtpLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpLogin")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl SmtpConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SMTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnv {
                    key: "SMTP_PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            from_email: lookup("SMTP_FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            port,
            user: lookup("SMTP_USER"),
            password: lookup("SMTP_PASSWORD"),
        })
    }

    /// Credentials for SMTP AUTH, or `None` if either part is unset or empty.
    pub fn login(&self) -> Option<SmtpLogin> {
        let user = self.user.as_deref().filter(|s| !s.is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.is_empty())?;
        Some(SmtpLogin {
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_deserialize() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "relay.log"
use_json: false
rotation: "daily"
gateway:
  host: "0.0.0.0"
  port: 8080
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.rotation, "daily");
        assert!(!config.use_json);
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn test_app_config_missing_file() {
        let err = AppConfig::from_file("config/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_smtp_defaults() {
        let config = SmtpConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.from_email, "noreply@printcalc.ru");
        assert_eq!(config.host, "smtp.yandex.ru");
        assert_eq!(config.port, 465);
        assert!(config.user.is_none());
        assert!(config.login().is_none());
    }

    #[test]
    fn test_smtp_overrides() {
        let config = SmtpConfig::from_lookup(lookup_from(&[
            ("SMTP_FROM_EMAIL", "orders@example.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_PORT", "2465"),
            ("SMTP_USER", "bot"),
            ("SMTP_PASSWORD", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.from_email, "orders@example.com");
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 2465);

        let login = config.login().unwrap();
        assert_eq!(login.user, "bot");
        assert_eq!(login.password, "secret");
    }

    #[test]
    fn test_smtp_invalid_port() {
        let err = SmtpConfig::from_lookup(lookup_from(&[("SMTP_PORT", "smtps")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "SMTP_PORT", .. }));
    }

    #[test]
    fn test_login_requires_both_parts() {
        let only_user = SmtpConfig::from_lookup(lookup_from(&[("SMTP_USER", "bot")])).unwrap();
        assert!(only_user.login().is_none());

        let empty_password = SmtpConfig::default().with_credentials("bot", "");
        assert!(empty_password.login().is_none());

        let empty_user = SmtpConfig::default().with_credentials("", "secret");
        assert!(empty_user.login().is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let config = SmtpConfig::default().with_credentials("bot", "secret");
        let printed = format!("{:?}", config);
        assert!(printed.contains("bot"));
        assert!(!printed.contains("secret"));

        let login = config.login().unwrap();
        assert!(!format!("{:?}", login).contains("secret"));
    }
}
