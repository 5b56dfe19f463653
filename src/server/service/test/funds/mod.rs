use crate::{
    model::balance::{RequestStatus, TransactionKind},
    server::{
        error::{ledger::LedgerError, workflow::WorkflowError, AppError},
        model::{
            account::AccountRef,
            funds::{
                CreateFundsRequestParam, DirectCreditParam, FundsRequestKind, ReviewRequestParam,
            },
        },
        service::{funds::FundsService, ledger::LedgerService, notification::Notifier},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod deposit;
mod withdrawal;

fn review(request_id: i32) -> ReviewRequestParam {
    ReviewRequestParam {
        request_id,
        admin_note: None,
    }
}
