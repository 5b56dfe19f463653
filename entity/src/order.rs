use sea_orm::entity::prelude::*;

/// Transfer order. Monetary columns are stored in minor currency units.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub driver_id: Option<i32>,
    pub status_id: i32,
    pub from_location: String,
    pub to_location: String,
    pub pickup_at: DateTimeUtc,
    pub flight_number: Option<String>,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
    pub passengers_count: i32,
    pub luggage_count: i32,
    pub transfer_type: Option<String>,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub price: i64,
    pub commission_amount: Option<i64>,
    pub driver_amount: Option<i64>,
    pub payment_type: String,
    pub payment_from_balance: bool,
    pub prepay_amount: i64,
    pub payment_url: Option<String>,
    pub payment_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to = "super::driver::Column::Id",
        on_delete = "SetNull"
    )]
    Driver,
    #[sea_orm(
        belongs_to = "super::order_status::Entity",
        from = "Column::StatusId",
        to = "super::order_status::Column::Id"
    )]
    OrderStatus,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Driver.def()
    }
}

impl Related<super::order_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
