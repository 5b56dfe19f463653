use sea_orm::entity::prelude::*;

/// Passenger account. `balance` is stored in minor currency units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub balance: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
    #[sea_orm(has_many = "super::balance_transaction::Entity")]
    BalanceTransaction,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::balance_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BalanceTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
