use super::*;

/// Tests commission split and counters on a successful accept.
///
/// Expected: 15% of 1000.00 withheld, order accepted, driver order count incremented
#[tokio::test]
async fn splits_commission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let driver = factory::driver::DriverFactory::new(db)
        .approved()
        .commission_rate_bp(1500)
        .build()
        .await?;
    let notifier = Notifier::default();

    let accepted = OrderService::new(db, &notifier, None, APP_URL)
        .accept(order.id, &Driver::from_entity(driver.clone()))
        .await?;

    assert_eq!(accepted.driver_id, Some(driver.id));
    assert_eq!(accepted.status_id, ORDER_STATUS_ACCEPTED);
    assert_eq!(accepted.commission_amount, Some(15_000));
    assert_eq!(accepted.driver_amount, Some(85_000));

    let reloaded = entity::prelude::Driver::find_by_id(driver.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reloaded.total_orders, 1);

    Ok(())
}

/// Expected: Err(OrderUnavailable) for the second driver
#[tokio::test]
async fn rejects_taken_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let first = factory::driver::DriverFactory::new(db).approved().build().await?;
    let second = factory::driver::DriverFactory::new(db).approved().build().await?;
    let notifier = Notifier::default();
    let service = OrderService::new(db, &notifier, None, APP_URL);

    service
        .accept(order.id, &Driver::from_entity(first))
        .await?;
    let result = service
        .accept(order.id, &Driver::from_entity(second))
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::OrderUnavailable(id))) if id == order.id
    ));

    Ok(())
}

/// Tests two drivers accepting the same order at once.
///
/// Expected: exactly one accept succeeds and the order carries that driver
#[tokio::test]
async fn concurrent_accepts_have_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, order) = factory::helpers::create_order_with_user(db).await?;
    let first = factory::driver::DriverFactory::new(db).approved().build().await?;
    let second = factory::driver::DriverFactory::new(db).approved().build().await?;
    let (first, second) = (Driver::from_entity(first), Driver::from_entity(second));
    let notifier = Notifier::default();
    let service = OrderService::new(db, &notifier, None, APP_URL);

    let (a, b) = tokio::join!(
        service.accept(order.id, &first),
        service.accept(order.id, &second)
    );
    let winner = match (a, b) {
        (Ok(_), Err(_)) => first.id,
        (Err(_), Ok(_)) => second.id,
        other => panic!("expected exactly one accept, got {:?}", other),
    };

    let account = Account::User(User::from_entity(user));
    let stored = service.get_by_id(order.id, &account).await?;
    assert_eq!(stored.driver_id, Some(winner));

    Ok(())
}

/// Tests that pending or deactivated drivers cannot take orders.
///
/// Expected: Err(AccessDenied) for both, order still open
#[tokio::test]
async fn requires_approved_active_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let pending = factory::create_driver(db).await?;
    let inactive = factory::driver::DriverFactory::new(db)
        .approved()
        .active(false)
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = OrderService::new(db, &notifier, None, APP_URL);

    for driver in [pending, inactive] {
        let result = service.accept(order.id, &Driver::from_entity(driver)).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    assert_eq!(service.get_available().await?.len(), 1);

    Ok(())
}

/// Expected: Err(OrderNotFound)
#[tokio::test]
async fn unknown_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::driver::DriverFactory::new(db).approved().build().await?;
    let notifier = Notifier::default();

    let result = OrderService::new(db, &notifier, None, APP_URL)
        .accept(404, &Driver::from_entity(driver))
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::OrderNotFound(404)))
    ));

    Ok(())
}
