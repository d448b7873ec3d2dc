use crate::error::SmokeError;
use crate::payloads::HistoryFilter;
use config::{Config as Cfg, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

/// Run parameters for the prober.
///
/// Every field defaults to the constant the harness was written against, so a
/// bare `Settings::load()` with no file and no environment probes a local
/// deployment with the shared test account.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Base URL of the messaging API, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_password")]
    pub password: Secret<String>,
    /// WhatsApp number that receives the test messages.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_media_url")]
    pub media_url: String,
    #[serde(default = "default_text_message")]
    pub text_message: String,
    #[serde(default = "default_media_caption")]
    pub media_caption: String,
    /// One batch contact entry is sent per message, in this order.
    #[serde(default = "default_batch_messages")]
    pub batch_messages: Vec<String>,
    #[serde(default)]
    pub history: HistoryFilter,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_json: bool,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_email() -> String {
    "test-user-1754071610@example.com".to_string()
}

fn default_password() -> Secret<String> {
    Secret::new("password123".to_string())
}

fn default_recipient() -> String {
    "554391964950".to_string()
}

fn default_media_url() -> String {
    "https://wppconnect.io/assets/images/boy-image-0ee58a6a9928587b8fae998188e26499.png"
        .to_string()
}

fn default_text_message() -> String {
    "Hello! 🤖 This is an automated API test.".to_string()
}

fn default_media_caption() -> String {
    "Image delivery test.".to_string()
}

fn default_batch_messages() -> Vec<String> {
    vec![
        "Batch message 1/2".to_string(),
        "Batch message 2/2".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            email: default_email(),
            password: default_password(),
            recipient: default_recipient(),
            media_url: default_media_url(),
            text_message: default_text_message(),
            media_caption: default_media_caption(),
            batch_messages: default_batch_messages(),
            history: HistoryFilter::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Load settings from `configuration.{yaml,toml,json}` (optional) and
    /// `SMOKE_*` environment variables, e.g. `SMOKE_API_URL`,
    /// `SMOKE_HISTORY__STATUS` or `SMOKE_BATCH_MESSAGES=first,second`.
    pub fn load() -> Result<Self, SmokeError> {
        dotenvy::dotenv().ok();

        let settings = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                Environment::with_prefix("SMOKE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("batch_messages"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Absolute URL for an endpoint path such as `/plan/status`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}
