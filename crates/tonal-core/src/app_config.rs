use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Delivery settings for negative-sentiment alerts.
#[derive(Clone)]
pub struct AlertSettings {
    pub recipient_email: String,
    pub sender_email: Option<String>,
    pub api_key: Option<String>,
    pub service_id: String,
    pub template_id: String,
    pub base_url: String,
}

impl std::fmt::Debug for AlertSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertSettings")
            .field("recipient_email", &self.recipient_email)
            .field("sender_email", &self.sender_email)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub history_path: PathBuf,
    pub history_max_items: usize,
    pub http_timeout_secs: u64,
    pub auto_translate: bool,
    pub translate_api_key: Option<String>,
    pub translate_base_url: String,
    /// `Some` only when alerts are enabled.
    pub alerts: Option<AlertSettings>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("history_path", &self.history_path)
            .field("history_max_items", &self.history_max_items)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("auto_translate", &self.auto_translate)
            .field(
                "translate_api_key",
                &self.translate_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("translate_base_url", &self.translate_base_url)
            .field("alerts", &self.alerts)
            .finish()
    }
}
