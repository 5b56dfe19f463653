//! Withdrawal and deposit requests and their admin review.
//!
//! A request is resolved with a conditional `pending → completed|rejected` update; the
//! balance change of an approval runs in the same transaction, so a request moves money
//! at most once.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::balance::{RequestStatus, TransactionKind},
    server::{
        data::funds_request::FundsRequestRepository,
        error::{ledger::LedgerError, workflow::WorkflowError, AppError},
        model::{
            account::AccountRef,
            funds::{
                CreateFundsRequestParam, DirectCreditParam, FundsRequest, FundsRequestKind,
                ReviewRequestParam,
            },
            ledger::{BalanceTransaction, LedgerEntryParam},
        },
        service::{
            ledger::LedgerService,
            notification::{message, Notifier},
        },
    },
};

pub struct FundsService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> FundsService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Files a withdrawal request. Funds stay on the balance until an admin approves.
    ///
    /// # Returns
    /// - `Ok(FundsRequest)` - Pending request
    /// - `Err(LedgerError::InvalidAmount)` - Amount is zero
    /// - `Err(LedgerError::InsufficientFunds)` - Balance below the amount right now
    /// - `Err(LedgerError::AccountNotFound)` - Account does not exist
    pub async fn request_withdrawal(
        &self,
        param: CreateFundsRequestParam,
    ) -> Result<FundsRequest, AppError> {
        if param.amount <= 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        let balance = LedgerService::new(self.db).get_balance(param.account).await?;
        if balance < param.amount {
            return Err(LedgerError::InsufficientFunds.into());
        }

        self.create(FundsRequestKind::Withdrawal, param).await
    }

    /// Files a deposit request to be confirmed by an admin once the money arrives.
    pub async fn request_deposit(
        &self,
        param: CreateFundsRequestParam,
    ) -> Result<FundsRequest, AppError> {
        if param.amount <= 0 {
            return Err(LedgerError::InvalidAmount.into());
        }

        LedgerService::new(self.db).get_balance(param.account).await?;

        self.create(FundsRequestKind::Deposit, param).await
    }

    async fn create(
        &self,
        kind: FundsRequestKind,
        param: CreateFundsRequestParam,
    ) -> Result<FundsRequest, AppError> {
        let request = FundsRequestRepository::new(self.db).create(kind, param).await?;

        tracing::info!(
            "{:?} request #{} filed by {} for {}",
            kind,
            request.id,
            request.account,
            request.amount
        );

        self.notifier.dispatch(message::funds_requested(&request));

        Ok(request)
    }

    /// Completes a pending request and applies its balance change.
    ///
    /// Withdrawals debit the account, deposits credit it. When the debit fails the
    /// transaction rolls back and the request stays pending.
    ///
    /// # Returns
    /// - `Ok(FundsRequest)` - Completed request
    /// - `Err(AppError::NotFound)` - Unknown request
    /// - `Err(WorkflowError::RequestNotPending)` - Already approved or rejected
    /// - `Err(LedgerError::InsufficientFunds)` - Withdrawal no longer covered
    pub async fn approve(
        &self,
        kind: FundsRequestKind,
        param: ReviewRequestParam,
    ) -> Result<FundsRequest, AppError> {
        let request_id = param.request_id;

        let txn = self.db.begin().await?;
        let repo = FundsRequestRepository::new(&txn);
        if !repo
            .resolve(kind, request_id, RequestStatus::Completed, param.admin_note)
            .await?
        {
            txn.rollback().await?;
            return Err(self.unresolvable(kind, request_id).await);
        }
        let request = repo
            .find_by_id(kind, request_id)
            .await?
            .ok_or_else(|| not_found(kind, request_id))?;

        let ledger = LedgerService::new(&txn);
        match kind {
            FundsRequestKind::Withdrawal => {
                ledger
                    .debit(LedgerEntryParam {
                        account: request.account,
                        amount: request.amount,
                        kind: TransactionKind::Withdrawal,
                        description: format!("Withdrawal request #{}", request.id),
                        order_id: None,
                    })
                    .await?;
            }
            FundsRequestKind::Deposit => {
                ledger
                    .credit(LedgerEntryParam {
                        account: request.account,
                        amount: request.amount,
                        kind: TransactionKind::Deposit,
                        description: format!("Deposit request #{}", request.id),
                        order_id: None,
                    })
                    .await?;
            }
        }
        txn.commit().await?;

        tracing::info!(
            "{:?} request #{} approved for {}",
            kind,
            request.id,
            request.account
        );

        Ok(request)
    }

    /// Rejects a pending request without touching the balance.
    pub async fn reject(
        &self,
        kind: FundsRequestKind,
        param: ReviewRequestParam,
    ) -> Result<FundsRequest, AppError> {
        let request_id = param.request_id;
        let repo = FundsRequestRepository::new(self.db);

        if !repo
            .resolve(kind, request_id, RequestStatus::Rejected, param.admin_note)
            .await?
        {
            return Err(self.unresolvable(kind, request_id).await);
        }

        tracing::info!("{:?} request #{} rejected", kind, request_id);

        repo.find_by_id(kind, request_id)
            .await?
            .ok_or_else(|| not_found(kind, request_id))
    }

    /// Admin top-up outside the deposit request flow.
    pub async fn direct_credit(
        &self,
        param: DirectCreditParam,
    ) -> Result<BalanceTransaction, AppError> {
        let description = param
            .note
            .unwrap_or_else(|| "Balance top-up by administrator".to_string());

        let txn = self.db.begin().await?;
        let transaction = LedgerService::new(&txn)
            .credit(LedgerEntryParam {
                account: param.account,
                amount: param.amount,
                kind: TransactionKind::Deposit,
                description,
                order_id: None,
            })
            .await?;
        txn.commit().await?;

        tracing::info!("Credited {} to {} directly", param.amount, param.account);

        Ok(transaction)
    }

    pub async fn get_all(&self, kind: FundsRequestKind) -> Result<Vec<FundsRequest>, AppError> {
        Ok(FundsRequestRepository::new(self.db).get_all(kind).await?)
    }

    pub async fn get_by_account(
        &self,
        kind: FundsRequestKind,
        account: AccountRef,
    ) -> Result<Vec<FundsRequest>, AppError> {
        Ok(FundsRequestRepository::new(self.db)
            .get_by_account(kind, account)
            .await?)
    }

    /// Explains why a conditional resolve matched no row.
    async fn unresolvable(&self, kind: FundsRequestKind, request_id: i32) -> AppError {
        match FundsRequestRepository::new(self.db)
            .find_by_id(kind, request_id)
            .await
        {
            Ok(Some(_)) => WorkflowError::RequestNotPending(request_id).into(),
            Ok(None) => not_found(kind, request_id),
            Err(e) => e.into(),
        }
    }
}

fn not_found(kind: FundsRequestKind, request_id: i32) -> AppError {
    AppError::NotFound(format!("{:?} request {} not found", kind, request_id))
}
