use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OrderStatusDto {
    pub id: i32,
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SaveOrderStatusDto {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#8B5CF6".to_string()
}
