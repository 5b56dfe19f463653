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
                    .table(DepositRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(DepositRequest::Id))
                    .col(integer_null(DepositRequest::UserId))
                    .col(integer_null(DepositRequest::DriverId))
                    .col(big_integer(DepositRequest::Amount))
                    .col(string(DepositRequest::PaymentMethod).default(""))
                    .col(string(DepositRequest::Status).default("pending"))
                    .col(text_null(DepositRequest::AdminNote))
                    .col(
                        timestamp_with_time_zone(DepositRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DepositRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposit_request_user_id")
                            .from(DepositRequest::Table, DepositRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deposit_request_driver_id")
                            .from(DepositRequest::Table, DepositRequest::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepositRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DepositRequest {
    Table,
    Id,
    UserId,
    DriverId,
    Amount,
    PaymentMethod,
    Status,
    AdminNote,
    CreatedAt,
    UpdatedAt,
}
