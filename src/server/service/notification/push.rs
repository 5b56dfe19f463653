//! Web push delivery through an HTTP push gateway.
//!
//! The gateway receives the account's stored subscriptions together with the message
//! and performs the VAPID signing and per-endpoint delivery.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use super::{Notification, NotificationChannel};
use crate::server::{data::push_subscription::PushSubscriptionRepository, error::external::ExternalError};

#[derive(Serialize)]
struct PushKeys<'a> {
    p256dh: &'a str,
    auth: &'a str,
}

#[derive(Serialize)]
struct PushTarget<'a> {
    endpoint: &'a str,
    keys: PushKeys<'a>,
}

#[derive(Serialize)]
struct PushRequest<'a> {
    subscriptions: Vec<PushTarget<'a>>,
    title: &'a str,
    body: &'a str,
}

pub struct PushChannel {
    http_client: reqwest::Client,
    gateway_url: String,
    db: DatabaseConnection,
}

impl PushChannel {
    pub fn new(http_client: reqwest::Client, gateway_url: String, db: DatabaseConnection) -> Self {
        Self {
            http_client,
            gateway_url,
            db,
        }
    }
}

#[async_trait]
impl NotificationChannel for PushChannel {
    fn name(&self) -> &'static str {
        "push"
    }

    async fn send(&self, notification: &Notification) -> Result<(), ExternalError> {
        let Some(account) = notification.push_to else {
            return Ok(());
        };

        let subscriptions = PushSubscriptionRepository::new(&self.db)
            .get_by_account(account)
            .await?;
        if subscriptions.is_empty() {
            return Ok(());
        }

        let request = PushRequest {
            subscriptions: subscriptions
                .iter()
                .map(|s| PushTarget {
                    endpoint: &s.endpoint,
                    keys: PushKeys {
                        p256dh: &s.p256dh,
                        auth: &s.auth,
                    },
                })
                .collect(),
            title: &notification.title,
            body: &notification.body,
        };

        let response = self
            .http_client
            .post(&self.gateway_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExternalError::Provider {
                provider: "push gateway",
                message: response.status().to_string(),
            });
        }

        Ok(())
    }
}
