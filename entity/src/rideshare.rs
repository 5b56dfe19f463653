use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rideshare")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub route_from: String,
    pub route_to: String,
    pub departure_at: DateTimeUtc,
    pub seats_total: i32,
    pub seats_available: i32,
    pub price_per_seat: i64,
    pub car_class: Option<String>,
    pub notes: Option<String>,
    pub created_by_name: String,
    pub created_by_phone: String,
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rideshare_booking::Entity")]
    RideshareBooking,
}

impl Related<super::rideshare_booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RideshareBooking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
