use crate::server::{
    data::order_status::OrderStatusRepository, model::status::SaveOrderStatusParam,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod get_all;
