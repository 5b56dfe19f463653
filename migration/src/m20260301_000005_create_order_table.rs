use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_driver_table::Driver,
    m20260301_000004_create_order_status_table::OrderStatus,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::UserId))
                    .col(integer_null(Orders::DriverId))
                    .col(integer(Orders::StatusId).default(1))
                    .col(string(Orders::FromLocation))
                    .col(string(Orders::ToLocation))
                    .col(timestamp_with_time_zone(Orders::PickupAt))
                    .col(string_null(Orders::FlightNumber))
                    .col(string(Orders::PassengerName))
                    .col(string(Orders::PassengerPhone))
                    .col(string_null(Orders::PassengerEmail))
                    .col(integer(Orders::PassengersCount).default(1))
                    .col(integer(Orders::LuggageCount).default(0))
                    .col(string_null(Orders::TransferType))
                    .col(string_null(Orders::CarClass))
                    .col(text_null(Orders::Notes))
                    .col(big_integer(Orders::Price).default(0))
                    .col(big_integer_null(Orders::CommissionAmount))
                    .col(big_integer_null(Orders::DriverAmount))
                    .col(string(Orders::PaymentType).default("cash"))
                    .col(boolean(Orders::PaymentFromBalance).default(false))
                    .col(big_integer(Orders::PrepayAmount).default(0))
                    .col(text_null(Orders::PaymentUrl))
                    .col(string_null(Orders::PaymentId))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_driver_id")
                            .from(Orders::Table, Orders::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_status_id")
                            .from(Orders::Table, Orders::StatusId)
                            .to(OrderStatus::Table, OrderStatus::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_available")
                    .table(Orders::Table)
                    .col(Orders::StatusId)
                    .col(Orders::DriverId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    UserId,
    DriverId,
    StatusId,
    FromLocation,
    ToLocation,
    PickupAt,
    FlightNumber,
    PassengerName,
    PassengerPhone,
    PassengerEmail,
    PassengersCount,
    LuggageCount,
    TransferType,
    CarClass,
    Notes,
    Price,
    CommissionAmount,
    DriverAmount,
    PaymentType,
    PaymentFromBalance,
    PrepayAmount,
    PaymentUrl,
    PaymentId,
    CreatedAt,
    UpdatedAt,
}
