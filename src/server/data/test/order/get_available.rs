use super::*;
use chrono::Duration;

/// Tests the open order feed for drivers.
///
/// Verifies that only unclaimed orders in the created status are listed, oldest
/// first, and that the limit applies.
///
/// Expected: Ok with the two oldest open orders
#[tokio::test]
async fn lists_open_orders_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let driver = factory::driver::DriverFactory::new(db).approved().build().await?;
    let now = Utc::now();

    let newest = factory::order::OrderFactory::new(db, user.id)
        .created_at(now)
        .build()
        .await?;
    let oldest = factory::order::OrderFactory::new(db, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let middle = factory::order::OrderFactory::new(db, user.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .driver_id(driver.id)
        .status_id(ORDER_STATUS_ACCEPTED)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    factory::order::OrderFactory::new(db, user.id)
        .status_id(ORDER_STATUS_CANCELLED)
        .created_at(now - Duration::hours(4))
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let all = repo.get_available(20).await?;
    let limited = repo.get_available(2).await?;

    let ids: Vec<i32> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![oldest.id, middle.id, newest.id]);
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, oldest.id);

    Ok(())
}
