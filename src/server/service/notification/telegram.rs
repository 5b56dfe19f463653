//! Staff chat notifications through the Telegram Bot API.

use async_trait::async_trait;
use serde::Serialize;

use super::{Notification, NotificationChannel};
use crate::server::error::external::ExternalError;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
}

/// Posts staff notifications to one Telegram chat via `sendMessage`.
pub struct TelegramChannel {
    http_client: reqwest::Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramChannel {
    pub fn new(http_client: reqwest::Client, bot_token: String, chat_id: String) -> Self {
        Self {
            http_client,
            bot_token,
            chat_id,
        }
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn send(&self, notification: &Notification) -> Result<(), ExternalError> {
        if !notification.notify_staff {
            return Ok(());
        }

        let response = self
            .http_client
            .post(format!(
                "{}/bot{}/sendMessage",
                TELEGRAM_API_URL, self.bot_token
            ))
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text: format!("{}\n\n{}", notification.title, notification.body),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExternalError::Provider {
                provider: "telegram",
                message: format!("{}: {}", status, response.text().await?),
            });
        }

        Ok(())
    }
}
