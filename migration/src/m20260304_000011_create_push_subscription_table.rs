use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_driver_table::Driver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PushSubscription::Table)
                    .if_not_exists()
                    .col(pk_auto(PushSubscription::Id))
                    .col(integer_null(PushSubscription::UserId))
                    .col(integer_null(PushSubscription::DriverId))
                    .col(text_uniq(PushSubscription::Endpoint))
                    .col(string(PushSubscription::P256dh).default(""))
                    .col(string(PushSubscription::Auth).default(""))
                    .col(
                        timestamp_with_time_zone(PushSubscription::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_push_subscription_user_id")
                            .from(PushSubscription::Table, PushSubscription::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_push_subscription_driver_id")
                            .from(PushSubscription::Table, PushSubscription::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PushSubscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PushSubscription {
    Table,
    Id,
    UserId,
    DriverId,
    Endpoint,
    P256dh,
    Auth,
    CreatedAt,
}
