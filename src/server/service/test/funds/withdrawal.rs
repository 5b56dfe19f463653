use super::*;

/// Tests the full withdrawal path for a driver.
///
/// Expected: request stays pending without touching the balance, approval debits it once
/// and records a withdrawal transaction
#[tokio::test]
async fn approval_debits_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::driver::DriverFactory::new(db)
        .approved()
        .balance(200_000)
        .build()
        .await?;
    let account = AccountRef::Driver(driver.id);
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);

    let request = service
        .request_withdrawal(CreateFundsRequestParam {
            account,
            amount: 150_000,
            details: "4276 0000 0000 0000".to_string(),
        })
        .await?;
    assert_eq!(request.status, RequestStatus::Pending);

    let ledger = LedgerService::new(db);
    assert_eq!(ledger.get_balance(account).await?, 200_000);

    let approved = service
        .approve(FundsRequestKind::Withdrawal, review(request.id))
        .await?;
    assert_eq!(approved.status, RequestStatus::Completed);
    assert_eq!(ledger.get_balance(account).await?, 50_000);

    let transactions = ledger.list_transactions(account, None).await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].kind, TransactionKind::Withdrawal);
    assert_eq!(transactions[0].amount, -150_000);

    Ok(())
}

/// Tests that concurrent approvals of one request move money once.
///
/// Expected: one approval succeeds, the other fails with RequestNotPending
#[tokio::test]
async fn single_shot_approval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(100_000)
        .build()
        .await?;
    let account = AccountRef::User(user.id);
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);
    let request = service
        .request_withdrawal(CreateFundsRequestParam {
            account,
            amount: 40_000,
            details: "SBP +79990000000".to_string(),
        })
        .await?;

    let (a, b) = tokio::join!(
        service.approve(FundsRequestKind::Withdrawal, review(request.id)),
        service.approve(FundsRequestKind::Withdrawal, review(request.id))
    );

    let failure = match (a, b) {
        (Ok(_), Err(e)) | (Err(e), Ok(_)) => e,
        other => panic!("expected exactly one approval, got {:?}", other),
    };
    assert!(matches!(
        failure,
        AppError::WorkflowErr(WorkflowError::RequestNotPending(_))
    ));
    assert_eq!(LedgerService::new(db).get_balance(account).await?, 60_000);

    Ok(())
}

/// Expected: Err(InsufficientFunds) when the balance does not cover the request
#[tokio::test]
async fn rejects_uncovered_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(10_000)
        .build()
        .await?;
    let notifier = Notifier::default();

    let result = FundsService::new(db, &notifier)
        .request_withdrawal(CreateFundsRequestParam {
            account: AccountRef::User(user.id),
            amount: 10_001,
            details: "card".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientFunds))
    ));

    Ok(())
}

/// Tests a balance that shrank between request and approval.
///
/// Expected: approval fails with InsufficientFunds and the request stays pending
#[tokio::test]
async fn failed_debit_keeps_request_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(50_000)
        .build()
        .await?;
    let account = AccountRef::User(user.id);
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);

    let first = service
        .request_withdrawal(CreateFundsRequestParam {
            account,
            amount: 40_000,
            details: "card".to_string(),
        })
        .await?;
    let second = service
        .request_withdrawal(CreateFundsRequestParam {
            account,
            amount: 40_000,
            details: "card".to_string(),
        })
        .await?;

    service
        .approve(FundsRequestKind::Withdrawal, review(first.id))
        .await?;
    let result = service
        .approve(FundsRequestKind::Withdrawal, review(second.id))
        .await;
    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientFunds))
    ));

    let pending = service
        .get_by_account(FundsRequestKind::Withdrawal, account)
        .await?
        .into_iter()
        .find(|r| r.id == second.id)
        .unwrap();
    assert_eq!(pending.status, RequestStatus::Pending);
    assert_eq!(LedgerService::new(db).get_balance(account).await?, 10_000);

    Ok(())
}
