use sea_orm::entity::prelude::*;

/// Driver account. `balance` is stored in minor currency units and
/// `commission_rate_bp` in basis points (1500 = 15%).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "driver")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub phone: String,
    pub name: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub car_brand: String,
    pub car_model: String,
    pub car_color: String,
    pub car_number: String,
    pub status: String,
    pub is_active: bool,
    pub is_online: bool,
    pub balance: i64,
    pub commission_rate_bp: i32,
    pub total_orders: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
