//! Push subscription repository.

use crate::server::model::{
    account::AccountRef,
    push::{PushSubscription, SubscribeParam},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct PushSubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PushSubscriptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers an endpoint for an account.
    ///
    /// Re-subscribing an existing endpoint moves it to the new account and replaces its
    /// keys.
    pub async fn upsert(&self, param: SubscribeParam) -> Result<PushSubscription, DbErr> {
        let (user_id, driver_id) = param.account.columns();

        let entity =
            entity::prelude::PushSubscription::insert(entity::push_subscription::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                driver_id: ActiveValue::Set(driver_id),
                endpoint: ActiveValue::Set(param.endpoint),
                p256dh: ActiveValue::Set(param.p256dh),
                auth: ActiveValue::Set(param.auth),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .on_conflict(
                OnConflict::column(entity::push_subscription::Column::Endpoint)
                    .update_columns([
                        entity::push_subscription::Column::UserId,
                        entity::push_subscription::Column::DriverId,
                        entity::push_subscription::Column::P256dh,
                        entity::push_subscription::Column::Auth,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(PushSubscription::from_entity(entity))
    }

    /// Removes an endpoint.
    ///
    /// # Returns
    /// - `Ok(true)` - Endpoint removed
    /// - `Ok(false)` - Endpoint was not registered
    pub async fn delete_by_endpoint(&self, endpoint: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::PushSubscription::delete_many()
            .filter(entity::push_subscription::Column::Endpoint.eq(endpoint))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every endpoint registered by an account.
    pub async fn get_by_account(&self, account: AccountRef) -> Result<Vec<PushSubscription>, DbErr> {
        let query = entity::prelude::PushSubscription::find();
        let query = match account {
            AccountRef::User(id) => {
                query.filter(entity::push_subscription::Column::UserId.eq(id))
            }
            AccountRef::Driver(id) => {
                query.filter(entity::push_subscription::Column::DriverId.eq(id))
            }
        };

        let entities = query.all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(PushSubscription::from_entity)
            .collect())
    }
}
