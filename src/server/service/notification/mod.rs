//! Best-effort notification fan-out.
//!
//! Workflows build a `Notification` after their database transaction commits and hand
//! it to `Notifier::dispatch`, which delivers it to every configured channel on a
//! detached task. Channel failures and timeouts are logged with `warn!` and never reach
//! the caller.

pub mod email;
pub mod message;
pub mod push;
pub mod telegram;

use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

use crate::server::{error::external::ExternalError, model::account::AccountRef};

/// Upper bound on a single channel delivery.
pub const CHANNEL_TIMEOUT: Duration = Duration::from_secs(5);

/// Message addressed to any combination of staff chat, one email and one account's
/// push endpoints. Each channel picks the audience it serves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Deliver to the staff chat.
    pub notify_staff: bool,
    /// Deliver by email to this address.
    pub email: Option<String>,
    /// Deliver as a push notification to this account's subscriptions.
    pub push_to: Option<AccountRef>,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn to_staff(mut self) -> Self {
        self.notify_staff = true;
        self
    }

    pub fn to_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn to_account(mut self, account: AccountRef) -> Self {
        self.push_to = Some(account);
        self
    }
}

/// External delivery channel.
///
/// `send` returns `Ok(())` without doing anything when the notification has no
/// audience for this channel.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, notification: &Notification) -> Result<(), ExternalError>;
}

/// Fans a notification out to every configured channel.
#[derive(Clone, Default)]
pub struct Notifier {
    channels: Arc<Vec<Arc<dyn NotificationChannel>>>,
}

impl Notifier {
    pub fn new(channels: Vec<Arc<dyn NotificationChannel>>) -> Self {
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Number of configured channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Delivers on a detached task and returns immediately.
    pub fn dispatch(&self, notification: Notification) {
        if self.channels.is_empty() {
            return;
        }

        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.deliver(&notification).await;
        });
    }

    /// Delivers to each channel in turn, bounding every attempt by `CHANNEL_TIMEOUT`.
    pub async fn deliver(&self, notification: &Notification) {
        for channel in self.channels.iter() {
            match tokio::time::timeout(CHANNEL_TIMEOUT, channel.send(notification)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(
                        "Failed to deliver '{}' via {}: {}",
                        notification.title,
                        channel.name(),
                        e
                    );
                }
                Err(_) => {
                    tracing::warn!(
                        "Delivering '{}' via {} timed out",
                        notification.title,
                        channel.name()
                    );
                }
            }
        }
    }
}
