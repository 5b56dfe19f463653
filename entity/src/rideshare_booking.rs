use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rideshare_booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rideshare_id: i32,
    pub passenger_name: String,
    pub passenger_phone: String,
    pub passenger_email: Option<String>,
    pub seats_count: i32,
    pub status: String,
    #[sea_orm(unique)]
    pub cancel_token: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rideshare::Entity",
        from = "Column::RideshareId",
        to = "super::rideshare::Column::Id",
        on_delete = "Cascade"
    )]
    Rideshare,
}

impl Related<super::rideshare::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rideshare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
