use super::*;

/// Expected: approval credits the balance with a deposit transaction
#[tokio::test]
async fn approval_credits_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let account = AccountRef::User(user.id);
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);

    let request = service
        .request_deposit(CreateFundsRequestParam {
            account,
            amount: 75_000,
            details: "card".to_string(),
        })
        .await?;
    service
        .approve(FundsRequestKind::Deposit, review(request.id))
        .await?;

    let ledger = LedgerService::new(db);
    assert_eq!(ledger.get_balance(account).await?, 75_000);
    let transactions = ledger.list_transactions(account, None).await?;
    assert_eq!(transactions[0].kind, TransactionKind::Deposit);
    assert_eq!(transactions[0].amount, 75_000);

    Ok(())
}

/// Expected: rejected request keeps the balance and cannot be approved afterwards
#[tokio::test]
async fn rejection_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let account = AccountRef::User(user.id);
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);

    let request = service
        .request_deposit(CreateFundsRequestParam {
            account,
            amount: 75_000,
            details: "card".to_string(),
        })
        .await?;
    let rejected = service
        .reject(
            FundsRequestKind::Deposit,
            ReviewRequestParam {
                request_id: request.id,
                admin_note: Some("Payment not received".to_string()),
            },
        )
        .await?;
    assert_eq!(rejected.status, RequestStatus::Rejected);
    assert_eq!(rejected.admin_note.as_deref(), Some("Payment not received"));

    let result = service
        .approve(FundsRequestKind::Deposit, review(request.id))
        .await;
    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::RequestNotPending(_)))
    ));
    assert_eq!(LedgerService::new(db).get_balance(account).await?, 0);

    Ok(())
}

/// Expected: Err(NotFound) when reviewing an unknown request
#[tokio::test]
async fn unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();

    let result = FundsService::new(db, &notifier)
        .approve(FundsRequestKind::Deposit, review(77))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Expected: direct credit to a driver adds to the balance; unknown accounts fail
#[tokio::test]
async fn direct_credit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_funds_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_driver(db).await?;
    let notifier = Notifier::default();
    let service = FundsService::new(db, &notifier);

    let transaction = service
        .direct_credit(DirectCreditParam {
            account: AccountRef::Driver(driver.id),
            amount: 5_000,
            note: Some("Bonus".to_string()),
        })
        .await?;
    assert_eq!(transaction.description, "Bonus");
    assert_eq!(
        LedgerService::new(db)
            .get_balance(AccountRef::Driver(driver.id))
            .await?,
        5_000
    );

    let result = service
        .direct_credit(DirectCreditParam {
            account: AccountRef::Driver(9_999),
            amount: 5_000,
            note: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::AccountNotFound(_)))
    ));

    Ok(())
}
