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
                    .table(WithdrawalRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(WithdrawalRequest::Id))
                    .col(integer_null(WithdrawalRequest::UserId))
                    .col(integer_null(WithdrawalRequest::DriverId))
                    .col(big_integer(WithdrawalRequest::Amount))
                    .col(string(WithdrawalRequest::Requisites))
                    .col(string(WithdrawalRequest::Status).default("pending"))
                    .col(text_null(WithdrawalRequest::AdminNote))
                    .col(
                        timestamp_with_time_zone(WithdrawalRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WithdrawalRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdrawal_request_user_id")
                            .from(WithdrawalRequest::Table, WithdrawalRequest::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdrawal_request_driver_id")
                            .from(WithdrawalRequest::Table, WithdrawalRequest::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WithdrawalRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WithdrawalRequest {
    Table,
    Id,
    UserId,
    DriverId,
    Amount,
    Requisites,
    Status,
    AdminNote,
    CreatedAt,
    UpdatedAt,
}
