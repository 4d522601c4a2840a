use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Default results feed (GMA Network's 2022 presidential tally).
const DEFAULT_SOURCE_URL: &str = "https://e22c.gmanetwork.com/n/PRESIDENT_PHILIPPINES.json";

/// Referer the upstream service requires before it will serve the feed.
const DEFAULT_REFERER: &str = "https://www.gmanetwork.com/";

/// Candidate whose lead is tracked, as named in the feed.
const DEFAULT_TARGET: &str = "ROBREDO, LENI (IND)";

const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// On-disk config shape. Only the Telegram credentials are expected in the
/// file; everything else has a default and exists so a deployment can point
/// the watcher at a mirror or another race.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    bot_id: Option<String>,
    #[serde(default)]
    recipient: Option<String>,
    #[serde(default)]
    source_url: Option<String>,
    #[serde(default)]
    referer: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    telegram_api: Option<String>,
    #[serde(default)]
    log_level: Option<String>,
}

/// Resolved runtime configuration. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot API token obtained from BotFather.
    pub bot_id: String,
    /// Target chat ID for notifications.
    pub recipient: String,
    /// Results feed URL.
    pub source_url: String,
    /// Referer header sent with the feed request.
    pub referer: String,
    /// Candidate name tracked for the lead computation.
    pub target: String,
    /// Telegram Bot API base URL.
    pub telegram_api: String,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: String,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Credentials missing from the file fall back to the
    /// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` environment variables.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: RawConfig = serde_json::from_str(&content).map_err(ConfigError::Parse)?;

        let bot_id = raw
            .bot_id
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .ok_or(ConfigError::MissingField { field: "bot_id" })?;
        let recipient = raw
            .recipient
            .or_else(|| std::env::var("TELEGRAM_CHAT_ID").ok())
            .ok_or(ConfigError::MissingField { field: "recipient" })?;

        Ok(Self {
            bot_id,
            recipient,
            source_url: raw.source_url.unwrap_or_else(|| DEFAULT_SOURCE_URL.into()),
            referer: raw.referer.unwrap_or_else(|| DEFAULT_REFERER.into()),
            target: raw.target.unwrap_or_else(|| DEFAULT_TARGET.into()),
            telegram_api: raw
                .telegram_api
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API.into()),
            log_level: raw.log_level.unwrap_or_else(|| "info".into()),
        })
    }

    /// Initialize the tracing subscriber. RUST_LOG wins over the config level.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));
        fmt().with_env_filter(filter).init();
    }
}
