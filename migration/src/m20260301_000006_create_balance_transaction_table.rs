use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_driver_table::Driver,
    m20260301_000005_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BalanceTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(BalanceTransaction::Id))
                    .col(integer_null(BalanceTransaction::UserId))
                    .col(integer_null(BalanceTransaction::DriverId))
                    .col(integer_null(BalanceTransaction::OrderId))
                    .col(big_integer(BalanceTransaction::Amount))
                    .col(string(BalanceTransaction::Kind))
                    .col(string(BalanceTransaction::Description).default(""))
                    .col(string(BalanceTransaction::Status).default("completed"))
                    .col(
                        timestamp_with_time_zone(BalanceTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balance_transaction_user_id")
                            .from(BalanceTransaction::Table, BalanceTransaction::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balance_transaction_driver_id")
                            .from(BalanceTransaction::Table, BalanceTransaction::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balance_transaction_order_id")
                            .from(BalanceTransaction::Table, BalanceTransaction::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BalanceTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BalanceTransaction {
    Table,
    Id,
    UserId,
    DriverId,
    OrderId,
    Amount,
    Kind,
    Description,
    Status,
    CreatedAt,
}
