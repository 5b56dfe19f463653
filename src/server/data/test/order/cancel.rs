use super::*;

/// Expected: Ok(true) for a created order, then Ok(false) on repeat
#[tokio::test]
async fn cancels_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, order) = factory::helpers::create_order_with_user(db).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.cancel(order.id).await?);
    assert!(!repo.cancel(order.id).await?);

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.status_id, ORDER_STATUS_CANCELLED);

    Ok(())
}

/// Tests that completed orders are terminal.
///
/// Expected: Ok(false) and status still completed
#[tokio::test]
async fn keeps_completed_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id)
        .status_id(ORDER_STATUS_COMPLETED)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    assert!(!repo.cancel(order.id).await?);

    let reloaded = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded.status_id, ORDER_STATUS_COMPLETED);

    Ok(())
}
