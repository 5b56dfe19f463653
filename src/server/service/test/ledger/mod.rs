use crate::{
    model::balance::TransactionKind,
    server::{
        error::{ledger::LedgerError, AppError},
        model::{account::AccountRef, ledger::LedgerEntryParam},
        service::ledger::LedgerService,
    },
};
use sea_orm::TransactionTrait;
use test_utils::{builder::TestBuilder, factory};


fn entry(account: AccountRef, amount: i64) -> LedgerEntryParam {
    LedgerEntryParam {
        account,
        amount,
        kind: TransactionKind::Payment,
        description: "Test entry".to_string(),
        order_id: None,
    }
}
