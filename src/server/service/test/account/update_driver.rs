use super::*;

/// Tests that approving without an explicit flag activates the driver.
///
/// Expected: approved → active; rejected → inactive
#[tokio::test]
async fn status_drives_activation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_driver(db).await?;
    let service = AccountService::new(db);

    let approved = service
        .update_driver(UpdateDriverParam {
            driver_id: driver.id,
            status: Some(DriverStatus::Approved),
            ..Default::default()
        })
        .await?;
    assert!(approved.is_active);
    assert!(approved.can_accept_orders());

    let rejected = service
        .update_driver(UpdateDriverParam {
            driver_id: driver.id,
            status: Some(DriverStatus::Rejected),
            ..Default::default()
        })
        .await?;
    assert!(!rejected.is_active);

    Ok(())
}

/// Expected: explicit is_active wins over the status default; commission stored
#[tokio::test]
async fn explicit_flag_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::create_driver(db).await?;

    let updated = AccountService::new(db)
        .update_driver(UpdateDriverParam {
            driver_id: driver.id,
            status: Some(DriverStatus::Approved),
            commission_rate_bp: Some(1000),
            is_active: Some(false),
        })
        .await?;

    assert_eq!(updated.status, DriverStatus::Approved);
    assert!(!updated.is_active);
    assert_eq!(updated.commission_rate_bp, 1000);

    Ok(())
}

/// Expected: Err(NotFound) for an unknown driver
#[tokio::test]
async fn unknown_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccountService::new(db)
        .update_driver(UpdateDriverParam {
            driver_id: 31,
            status: Some(DriverStatus::Approved),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
