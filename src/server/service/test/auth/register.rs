use super::*;

/// Expected: Err(PhoneAlreadyRegistered) for a second passenger with the same phone
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();
    let service = AuthService::new(db, &notifier);

    let user = service.register_user(user_param("+79990000001")).await?;
    assert_eq!(user.balance, 0);
    assert!(user.is_active);

    let result = service.register_user(user_param("+79990000001")).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PhoneAlreadyRegistered))
    ));

    Ok(())
}

/// Tests driver registration state and the staff alert.
///
/// Expected: driver pending and inactive, staff notified
#[tokio::test]
async fn registers_pending_driver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (notifier, mut rx) = recording_notifier();

    let driver = AuthService::new(db, &notifier)
        .register_driver(driver_param("+79990000002"))
        .await?;

    assert_eq!(driver.status, DriverStatus::Pending);
    assert!(!driver.is_active);
    assert!(!driver.can_accept_orders());

    let notification = rx.recv().await.unwrap();
    assert!(notification.notify_staff);
    assert!(notification.body.contains("A123BC77"));

    Ok(())
}

/// Expected: first bootstrap creates an admin, second is a no-op
#[tokio::test]
async fn bootstraps_admin_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();
    let service = AuthService::new(db, &notifier);

    let created = service
        .ensure_bootstrap_admin("Root@Example.com", "changeme")
        .await?;
    assert_eq!(created.map(|a| a.email).as_deref(), Some("root@example.com"));
    assert!(service
        .ensure_bootstrap_admin("other@example.com", "changeme")
        .await?
        .is_none());

    Ok(())
}
