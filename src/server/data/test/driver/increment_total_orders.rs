use super::*;

/// Expected: total_orders grows by one per call
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_driver(db).await?;

    let repo = DriverRepository::new(db);
    repo.increment_total_orders(driver.id).await?;
    repo.increment_total_orders(driver.id).await?;

    let reloaded = repo.find_by_id(driver.id).await?.unwrap();
    assert_eq!(reloaded.total_orders, 2);

    Ok(())
}
