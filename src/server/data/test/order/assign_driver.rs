use super::*;

fn assign(order_id: i32, driver_id: i32, price: i64) -> AssignDriverParam {
    AssignDriverParam {
        order_id,
        driver_id,
        price,
        commission_amount: 15_000,
        driver_amount: price - 15_000,
    }
}

/// Tests claiming an open order.
///
/// Expected: Ok(true) with driver, accepted status and amounts stored
#[tokio::test]
async fn claims_open_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let driver = factory::driver::DriverFactory::new(db)
        .approved()
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let claimed = repo.assign_driver(assign(order.id, driver.id, order.price)).await?;

    assert!(claimed);
    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.driver_id, Some(driver.id));
    assert_eq!(reloaded.status_id, ORDER_STATUS_ACCEPTED);
    assert_eq!(reloaded.commission_amount, Some(15_000));
    assert_eq!(reloaded.driver_amount, Some(order.price - 15_000));

    Ok(())
}

/// Tests that a second driver cannot claim an order already taken.
///
/// Expected: Ok(false) and the first driver kept
#[tokio::test]
async fn refuses_second_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let first = factory::driver::DriverFactory::new(db).approved().build().await?;
    let second = factory::driver::DriverFactory::new(db).approved().build().await?;

    let repo = OrderRepository::new(db);
    assert!(repo.assign_driver(assign(order.id, first.id, order.price)).await?);
    assert!(!repo.assign_driver(assign(order.id, second.id, order.price)).await?);

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.driver_id, Some(first.id));

    Ok(())
}

/// Tests that a claim computed from a stale price is refused.
///
/// Expected: Ok(false) when the stored price differs from the one in the param
#[tokio::test]
async fn refuses_claim_with_stale_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;
    let driver = factory::driver::DriverFactory::new(db).approved().build().await?;

    let repo = OrderRepository::new(db);
    let claimed = repo
        .assign_driver(assign(order.id, driver.id, order.price + 1))
        .await?;

    assert!(!claimed);

    Ok(())
}
