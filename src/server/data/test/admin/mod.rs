use crate::server::{data::admin::AdminRepository, model::account::CreateAdminParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod any_exists;
mod find_by_email;
