use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string_uniq(Driver::Phone))
                    .col(string(Driver::Name))
                    .col(string_null(Driver::Email))
                    .col(string(Driver::PasswordHash))
                    .col(string(Driver::CarBrand).default(""))
                    .col(string(Driver::CarModel).default(""))
                    .col(string(Driver::CarColor).default(""))
                    .col(string(Driver::CarNumber).default(""))
                    .col(string(Driver::Status).default("pending"))
                    .col(boolean(Driver::IsActive).default(false))
                    .col(boolean(Driver::IsOnline).default(false))
                    .col(big_integer(Driver::Balance).default(0))
                    .col(integer(Driver::CommissionRateBp).default(1500))
                    .col(integer(Driver::TotalOrders).default(0))
                    .col(
                        timestamp_with_time_zone(Driver::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    Phone,
    Name,
    Email,
    PasswordHash,
    CarBrand,
    CarModel,
    CarColor,
    CarNumber,
    Status,
    IsActive,
    IsOnline,
    Balance,
    CommissionRateBp,
    TotalOrders,
    CreatedAt,
}
