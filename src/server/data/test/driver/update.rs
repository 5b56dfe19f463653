use super::*;

/// Tests approving a driver and setting the commission rate.
///
/// Expected: Ok(Some) with the new status and rate, other fields untouched
#[tokio::test]
async fn approves_driver_and_sets_rate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_driver(db).await?;

    let repo = DriverRepository::new(db);
    let updated = repo
        .update(UpdateDriverParam {
            driver_id: driver.id,
            status: Some(DriverStatus::Approved),
            commission_rate_bp: Some(2000),
            is_active: Some(true),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, DriverStatus::Approved);
    assert_eq!(updated.commission_rate_bp, 2000);
    assert!(updated.can_accept_orders());
    assert_eq!(updated.phone, driver.phone);

    Ok(())
}

/// Expected: Ok(None) for a missing driver
#[tokio::test]
async fn returns_none_for_missing_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);
    let updated = repo
        .update(UpdateDriverParam {
            driver_id: 42,
            ..Default::default()
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
