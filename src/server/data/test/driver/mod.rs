use crate::{
    model::account::DriverStatus,
    server::{
        data::driver::{DriverRepository, DEFAULT_COMMISSION_RATE_BP},
        model::account::{CreateDriverParam, UpdateDriverParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod increment_total_orders;
mod update;
