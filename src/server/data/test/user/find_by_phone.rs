use super::*;

/// Expected: Ok(Some) for a registered phone
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::user::UserFactory::new(db)
        .phone("+79991112233")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_phone("+79991112233").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Expected: Ok(None) for an unknown phone
#[tokio::test]
async fn returns_none_for_unknown_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_phone("+70000000000").await?;

    assert!(found.is_none());

    Ok(())
}
