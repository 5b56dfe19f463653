use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok(Some) with is_active false
#[tokio::test]
async fn deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_active(user.id, false).await?;

    assert!(!updated.unwrap().is_active);

    Ok(())
}

/// Expected: Ok(None) for a missing user
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.set_active(999, false).await?;

    assert!(updated.is_none());

    Ok(())
}
