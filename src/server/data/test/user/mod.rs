use crate::server::{data::user::UserRepository, model::account::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_phone;
mod set_active;
