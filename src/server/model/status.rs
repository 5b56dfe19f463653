//! Order status lookup models.

use crate::{
    model::status::{OrderStatusDto, SaveOrderStatusDto},
    server::{error::AppError, util::validate::required_text},
};

pub const ORDER_STATUS_CREATED: i32 = 1;
pub const ORDER_STATUS_ACCEPTED: i32 = 2;
pub const ORDER_STATUS_IN_PROGRESS: i32 = 3;
pub const ORDER_STATUS_COMPLETED: i32 = 4;
pub const ORDER_STATUS_CANCELLED: i32 = 5;

/// Statuses the workflow depends on; they cannot be deleted.
pub fn is_builtin_status(id: i32) -> bool {
    (ORDER_STATUS_CREATED..=ORDER_STATUS_CANCELLED).contains(&id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatus {
    pub id: i32,
    pub name: String,
    pub color: String,
}

impl OrderStatus {
    pub fn into_dto(self) -> OrderStatusDto {
        OrderStatusDto {
            id: self.id,
            name: self.name,
            color: self.color,
        }
    }

    pub fn from_entity(entity: entity::order_status::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveOrderStatusParam {
    pub name: String,
    pub color: String,
}

impl SaveOrderStatusParam {
    pub fn from_dto(dto: SaveOrderStatusDto) -> Result<Self, AppError> {
        let color = dto.color.trim().to_string();
        let valid_color = color.len() == 7
            && color.starts_with('#')
            && color[1..].chars().all(|c| c.is_ascii_hexdigit());
        if !valid_color {
            return Err(AppError::validation("color", "color must be a #RRGGBB value"));
        }

        Ok(Self {
            name: required_text("name", Some(dto.name))?,
            color,
        })
    }
}
