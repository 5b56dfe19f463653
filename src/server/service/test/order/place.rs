use super::*;

/// Tests the upfront amount of a prepay order and the payment link request.
///
/// Expected: prepay of 300.00 for a 1000.00 order, link requested for that amount
/// and stored on the order
#[tokio::test]
async fn requests_prepay_link() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notifier = Notifier::default();
    let provider = FixedPaymentProvider::default();

    let order = OrderService::new(
        db,
        &notifier,
        Some(&provider as &dyn PaymentProvider),
        APP_URL,
    )
    .place(place_param(user.id, 100_000, PaymentType::Prepay, false))
    .await?;

    assert_eq!(order.prepay_amount, 30_000);
    assert_eq!(
        order.payment_url,
        Some(format!("https://pay.test/{}", order.id))
    );

    let requests = provider.requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].amount, 30_000);
    assert_eq!(
        requests[0].return_url,
        format!("https://transfer.test/orders/{}", order.id)
    );

    Ok(())
}

/// Expected: 300.00 debited from a 500.00 balance with one payment transaction
#[tokio::test]
async fn pays_from_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(50_000)
        .build()
        .await?;
    let notifier = Notifier::default();

    let order = OrderService::new(db, &notifier, None, APP_URL)
        .place(place_param(user.id, 30_000, PaymentType::Full, true))
        .await?;

    let ledger = LedgerService::new(db);
    let account = AccountRef::User(user.id);
    assert_eq!(ledger.get_balance(account).await?, 20_000);

    let transactions = ledger.list_transactions(account, None).await?;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, -30_000);
    assert_eq!(transactions[0].order_id, Some(order.id));
    assert!(order.payment_url.is_none());

    Ok(())
}

/// Tests that a failed debit leaves no order behind.
///
/// Expected: Err(InsufficientFunds), no order for the user, balance unchanged
#[tokio::test]
async fn insufficient_balance_creates_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(50_000)
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = OrderService::new(db, &notifier, None, APP_URL);

    let result = service
        .place(place_param(user.id, 60_000, PaymentType::Full, true))
        .await;
    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InsufficientFunds))
    ));

    let account = Account::User(User::from_entity(user.clone()));
    assert!(service.get_for_account(&account).await?.is_empty());
    assert_eq!(
        LedgerService::new(db)
            .get_balance(AccountRef::User(user.id))
            .await?,
        50_000
    );

    Ok(())
}

/// Expected: Err(InvalidAmount) for a free order paid from balance
#[tokio::test]
async fn rejects_zero_price_from_balance() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notifier = Notifier::default();

    let result = OrderService::new(db, &notifier, None, APP_URL)
        .place(place_param(user.id, 0, PaymentType::Cash, true))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LedgerErr(LedgerError::InvalidAmount))
    ));

    Ok(())
}

/// Tests that the payment provider being down does not fail the order.
///
/// Expected: Ok with the order stored and no payment url
#[tokio::test]
async fn survives_payment_provider_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let notifier = Notifier::default();
    let provider = FailingPaymentProvider;

    let service = OrderService::new(
        db,
        &notifier,
        Some(&provider as &dyn PaymentProvider),
        APP_URL,
    );
    let order = service
        .place(place_param(user.id, 100_000, PaymentType::Full, false))
        .await?;

    assert!(order.payment_url.is_none());
    let account = Account::User(User::from_entity(user));
    let stored = service.get_by_id(order.id, &account).await?;
    assert!(stored.payment_url.is_none());

    Ok(())
}

/// Expected: staff notification carrying the order number and the passenger email
#[tokio::test]
async fn notifies_staff_and_passenger() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (notifier, mut rx) = recording_notifier();

    let order = OrderService::new(db, &notifier, None, APP_URL)
        .place(place_param(user.id, 100_000, PaymentType::Cash, false))
        .await?;

    let notification = rx.recv().await.unwrap();
    assert!(notification.notify_staff);
    assert!(notification.title.contains(&format!("#{}", order.id)));
    assert_eq!(notification.email.as_deref(), Some("maria@example.com"));

    Ok(())
}

/// Tests two concurrent balance-paid orders competing for one balance.
///
/// Expected: exactly one order placed, balance never negative
#[tokio::test]
async fn concurrent_balance_orders() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(50_000)
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = OrderService::new(db, &notifier, None, APP_URL);

    let (first, second) = tokio::join!(
        service.place(place_param(user.id, 30_000, PaymentType::Full, true)),
        service.place(place_param(user.id, 30_000, PaymentType::Full, true)),
    );

    assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
    assert_eq!(
        LedgerService::new(db)
            .get_balance(AccountRef::User(user.id))
            .await?,
        20_000
    );

    Ok(())
}
