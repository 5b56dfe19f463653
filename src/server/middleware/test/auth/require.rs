use super::*;

/// Expected: Err(NotLoggedIn) for an anonymous session
#[tokio::test]
async fn anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::NotLoggedIn))));

    Ok(())
}

/// Tests that admins pass the admin permission and nothing else.
///
/// Expected: Ok(Account::Admin) for Admin, AccessDenied for User
#[tokio::test]
async fn admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let admin = factory::create_admin(db).await?;
    AuthSession::new(session)
        .set_principal(SessionPrincipal::Admin(admin.id))
        .await?;

    let guard = AuthGuard::new(db, session);
    let account = guard.require(&[Permission::Admin]).await?;
    assert!(matches!(account, Account::Admin(a) if a.id == admin.id));

    let result = guard.require(&[Permission::User]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the split between any driver and drivers allowed to take orders.
///
/// Expected: pending driver passes Driver but not ApprovedDriver
#[tokio::test]
async fn pending_driver_cannot_take_orders() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let driver = factory::create_driver(db).await?;
    AuthSession::new(session)
        .set_principal(SessionPrincipal::Driver(driver.id))
        .await?;

    let guard = AuthGuard::new(db, session);
    guard.require(&[Permission::Driver]).await?;
    guard.require(&[Permission::BalanceHolder]).await?;

    let result = guard.require(&[Permission::ApprovedDriver]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Expected: approved, active driver passes ApprovedDriver
#[tokio::test]
async fn approved_driver() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let driver = factory::driver::DriverFactory::new(db)
        .approved()
        .build()
        .await?;
    AuthSession::new(session)
        .set_principal(SessionPrincipal::Driver(driver.id))
        .await?;

    let account = AuthGuard::new(db, session)
        .require(&[Permission::Driver, Permission::ApprovedDriver])
        .await?;

    assert!(matches!(account, Account::Driver(d) if d.id == driver.id));

    Ok(())
}

/// Tests a passenger deactivated after logging in.
///
/// Expected: Err(AccountDisabled) and the session is cleared
#[tokio::test]
async fn deactivated_user_is_logged_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;
    let auth_session = AuthSession::new(session);
    auth_session
        .set_principal(SessionPrincipal::User(user.id))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::User])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));
    assert!(auth_session.get_principal().await?.is_none());

    Ok(())
}

/// Expected: Err(AccountNotInDatabase) when the account was deleted after login
#[tokio::test]
async fn stale_principal() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    AuthSession::new(session)
        .set_principal(SessionPrincipal::User(12))
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotInDatabase(_)))
    ));

    Ok(())
}
