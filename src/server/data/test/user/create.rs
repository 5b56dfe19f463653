use super::*;

fn param(phone: &str) -> CreateUserParam {
    CreateUserParam {
        phone: phone.to_string(),
        name: "Anna".to_string(),
        email: Some("anna@example.com".to_string()),
        password_hash: "salt$hash".to_string(),
    }
}

/// Tests creating a new passenger.
///
/// Expected: Ok with zero balance and the account active
#[tokio::test]
async fn creates_user_with_zero_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("+79990000001")).await?;

    assert_eq!(user.phone, "+79990000001");
    assert_eq!(user.balance, 0);
    assert!(user.is_active);

    Ok(())
}

/// Tests that phone numbers are unique.
///
/// Expected: Err on the second insert with the same phone
#[tokio::test]
async fn fails_for_duplicate_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("+79990000002")).await?;
    let result = repo.create(param("+79990000002")).await;

    assert!(result.is_err());

    Ok(())
}
