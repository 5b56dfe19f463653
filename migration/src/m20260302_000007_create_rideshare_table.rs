use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rideshare::Table)
                    .if_not_exists()
                    .col(pk_auto(Rideshare::Id))
                    .col(string(Rideshare::RouteFrom))
                    .col(string(Rideshare::RouteTo))
                    .col(timestamp_with_time_zone(Rideshare::DepartureAt))
                    .col(integer(Rideshare::SeatsTotal))
                    .col(integer(Rideshare::SeatsAvailable))
                    .col(big_integer(Rideshare::PricePerSeat).default(0))
                    .col(string_null(Rideshare::CarClass))
                    .col(text_null(Rideshare::Notes))
                    .col(string(Rideshare::CreatedByName))
                    .col(string(Rideshare::CreatedByPhone))
                    .col(string(Rideshare::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(Rideshare::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .check(Expr::col(Rideshare::SeatsAvailable).gte(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rideshare::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rideshare {
    Table,
    Id,
    RouteFrom,
    RouteTo,
    DepartureAt,
    SeatsTotal,
    SeatsAvailable,
    PricePerSeat,
    CarClass,
    Notes,
    CreatedByName,
    CreatedByPhone,
    Status,
    CreatedAt,
}
