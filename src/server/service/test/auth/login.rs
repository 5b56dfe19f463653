use super::*;

/// Expected: correct password logs in, wrong password and unknown phone fail alike
#[tokio::test]
async fn checks_user_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();
    let service = AuthService::new(db, &notifier);
    let user = service.register_user(user_param("+79990000010")).await?;

    let logged_in = service
        .login_user(phone_login(" +79990000010 ", "secret1"))
        .await?;
    assert_eq!(logged_in.id, user.id);

    for dto in [
        phone_login("+79990000010", "wrong"),
        phone_login("+70000000000", "secret1"),
    ] {
        assert!(matches!(
            service.login_user(dto).await,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Expected: Err(AccountDisabled) for a deactivated passenger with valid credentials
#[tokio::test]
async fn rejects_disabled_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .phone("+79990000011")
        .password_hash(hash_password("secret1"))
        .active(false)
        .build()
        .await?;
    let notifier = Notifier::default();

    let result = AuthService::new(db, &notifier)
        .login_user(phone_login("+79990000011", "secret1"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));

    Ok(())
}

/// Tests that pending drivers can still log in.
///
/// Expected: Ok for a pending, inactive driver
#[tokio::test]
async fn pending_driver_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();
    let service = AuthService::new(db, &notifier);
    service.register_driver(driver_param("+79990000012")).await?;

    let driver = service
        .login_driver(phone_login("+79990000012", "secret1"))
        .await?;

    assert_eq!(driver.status, DriverStatus::Pending);

    Ok(())
}

/// Expected: admin login is case-insensitive on email and records the login time
#[tokio::test]
async fn admin_login_touches_last_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::admin::AdminFactory::new(db)
        .email("ops@example.com")
        .password_hash(hash_password("hunter22"))
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = AuthService::new(db, &notifier);

    let admin = service
        .login_admin(AdminLoginDto {
            email: "OPS@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await?;
    assert_eq!(admin.email, "ops@example.com");

    let stored = AdminRepository::new(db).find_by_id(admin.id).await?.unwrap();
    assert!(stored.last_login_at.is_some());

    Ok(())
}

/// Expected: Err(AccountDisabled) for a deactivated admin with valid credentials
#[tokio::test]
async fn rejects_disabled_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::admin::AdminFactory::new(db)
        .email("former@example.com")
        .password_hash(hash_password("hunter22"))
        .active(false)
        .build()
        .await?;
    let notifier = Notifier::default();

    let result = AuthService::new(db, &notifier)
        .login_admin(AdminLoginDto {
            email: "former@example.com".to_string(),
            password: "hunter22".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));

    Ok(())
}
