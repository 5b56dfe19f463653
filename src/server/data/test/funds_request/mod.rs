use crate::{
    model::balance::RequestStatus,
    server::{
        data::funds_request::FundsRequestRepository,
        model::{
            account::AccountRef,
            funds::{CreateFundsRequestParam, FundsRequestKind},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod resolve;
