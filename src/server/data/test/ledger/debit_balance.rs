use super::*;

/// Tests debiting a balance that covers the amount.
///
/// Expected: Ok(true) and the balance reduced by the amount
#[tokio::test]
async fn debits_when_balance_covers_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .balance(50_000)
        .build()
        .await?;
    let account = AccountRef::User(user.id);

    let repo = LedgerRepository::new(db);
    let debited = repo.debit_balance(account, 50_000).await?;

    assert!(debited);
    assert_eq!(repo.get_balance(account).await?, Some(0));

    Ok(())
}

/// Tests that a debit larger than the balance changes nothing.
///
/// Expected: Ok(false) and the balance unchanged
#[tokio::test]
async fn refuses_debit_beyond_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::driver::DriverFactory::new(db)
        .balance(1_000)
        .build()
        .await?;
    let account = AccountRef::Driver(driver.id);

    let repo = LedgerRepository::new(db);
    let debited = repo.debit_balance(account, 1_001).await?;

    assert!(!debited);
    assert_eq!(repo.get_balance(account).await?, Some(1_000));

    Ok(())
}

/// Expected: Ok(false) for an account that does not exist
#[tokio::test]
async fn refuses_debit_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LedgerRepository::new(db);
    let debited = repo.debit_balance(AccountRef::User(404), 1).await?;

    assert!(!debited);
    assert_eq!(repo.get_balance(AccountRef::User(404)).await?, None);

    Ok(())
}
