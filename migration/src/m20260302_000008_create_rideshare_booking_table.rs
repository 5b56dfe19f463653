use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000007_create_rideshare_table::Rideshare;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RideshareBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(RideshareBooking::Id))
                    .col(integer(RideshareBooking::RideshareId))
                    .col(string(RideshareBooking::PassengerName))
                    .col(string(RideshareBooking::PassengerPhone))
                    .col(string_null(RideshareBooking::PassengerEmail))
                    .col(integer(RideshareBooking::SeatsCount))
                    .col(string(RideshareBooking::Status).default("confirmed"))
                    .col(string_uniq(RideshareBooking::CancelToken))
                    .col(
                        timestamp_with_time_zone(RideshareBooking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rideshare_booking_rideshare_id")
                            .from(RideshareBooking::Table, RideshareBooking::RideshareId)
                            .to(Rideshare::Table, Rideshare::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RideshareBooking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RideshareBooking {
    Table,
    Id,
    RideshareId,
    PassengerName,
    PassengerPhone,
    PassengerEmail,
    SeatsCount,
    Status,
    CancelToken,
    CreatedAt,
}
