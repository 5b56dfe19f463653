use sea_orm::DatabaseConnection;

use crate::server::{
    data::push_subscription::PushSubscriptionRepository,
    error::AppError,
    model::push::{PushSubscription, SubscribeParam},
};

/// Browser push endpoint registration.
pub struct PushService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PushService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an endpoint for the account, taking it over if another account had it.
    pub async fn subscribe(&self, param: SubscribeParam) -> Result<PushSubscription, AppError> {
        let subscription = PushSubscriptionRepository::new(self.db)
            .upsert(param)
            .await?;

        tracing::debug!("Push endpoint {} registered", subscription.id);

        Ok(subscription)
    }

    /// Removes an endpoint. Unknown endpoints are ignored.
    pub async fn unsubscribe(&self, endpoint: &str) -> Result<(), AppError> {
        PushSubscriptionRepository::new(self.db)
            .delete_by_endpoint(endpoint)
            .await?;

        Ok(())
    }
}
