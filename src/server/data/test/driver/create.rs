use super::*;

/// Tests registering a driver.
///
/// Expected: Ok with pending status, inactive and the default commission rate
#[tokio::test]
async fn creates_pending_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);
    let driver = repo
        .create(CreateDriverParam {
            phone: "+79995550000".to_string(),
            name: "Sergey".to_string(),
            email: None,
            password_hash: "salt$hash".to_string(),
            car_brand: "Kia".to_string(),
            car_model: "Rio".to_string(),
            car_color: "White".to_string(),
            car_number: "B777OP".to_string(),
        })
        .await?;

    assert_eq!(driver.status, DriverStatus::Pending);
    assert!(!driver.is_active);
    assert!(!driver.can_accept_orders());
    assert_eq!(driver.commission_rate_bp, DEFAULT_COMMISSION_RATE_BP);
    assert_eq!(driver.total_orders, 0);

    Ok(())
}
