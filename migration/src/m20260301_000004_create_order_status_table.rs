use sea_orm_migration::{prelude::*, schema::*};

/// Statuses the order workflow depends on. Ids are fixed.
const DEFAULT_STATUSES: [(i32, &str, &str); 5] = [
    (1, "Created", "#8B5CF6"),
    (2, "Accepted", "#3B82F6"),
    (3, "In progress", "#F59E0B"),
    (4, "Completed", "#10B981"),
    (5, "Cancelled", "#EF4444"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderStatus::Id))
                    .col(string(OrderStatus::Name))
                    .col(string(OrderStatus::Color).default("#8B5CF6"))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert.into_table(OrderStatus::Table).columns([
            OrderStatus::Id,
            OrderStatus::Name,
            OrderStatus::Color,
        ]);
        for (id, name, color) in DEFAULT_STATUSES {
            insert.values_panic([id.into(), name.into(), color.into()]);
        }

        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderStatus {
    Table,
    Id,
    Name,
    Color,
}
