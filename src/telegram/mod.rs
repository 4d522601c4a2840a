//! Telegram notification via the Bot API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::{NotifyError, Result};

/// Outbound notification seam. The pipeline only ever sends plain text; the
/// trait exists so tests can record deliveries without a network.
#[async_trait]
pub trait Notify {
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Notifier that POSTs to the Telegram Bot API's sendMessage endpoint.
///
/// Fire-and-forget: a transport failure is an error, but a non-success
/// response status is only logged. Telegram rejections (bad token, unknown
/// chat) therefore do not abort the run.
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_id: String,
    recipient: String,
}

impl TelegramNotifier {
    pub fn new(api_base: String, bot_id: String, recipient: String) -> Self {
        Self {
            client: Client::new(),
            api_base,
            bot_id,
            recipient,
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_id)
    }
}

/// Body for the sendMessage call. Split out so tests can pin the wire shape.
pub fn send_message_payload(chat_id: &str, text: &str) -> Value {
    json!({
        "chat_id": chat_id,
        "text": text,
        "parse_mode": "markdown",
        "disable_web_page_preview": true,
    })
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&send_message_payload(&self.recipient, text))
            .send()
            .await
            .map_err(NotifyError::Request)?;

        debug!(status = %response.status(), "Telegram sendMessage response");
        info!(chat_id = %self.recipient, "notification sent");
        Ok(())
    }
}
