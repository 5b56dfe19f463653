use super::*;

/// Expected: Ok(true) and the driver balance increased
#[tokio::test]
async fn credits_driver_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let driver = factory::driver::DriverFactory::new(db)
        .balance(250)
        .build()
        .await?;
    let account = AccountRef::Driver(driver.id);

    let repo = LedgerRepository::new(db);
    let credited = repo.credit_balance(account, 750).await?;

    assert!(credited);
    assert_eq!(repo.get_balance(account).await?, Some(1_000));

    Ok(())
}

/// Expected: Ok(false) when the account does not exist
#[tokio::test]
async fn reports_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LedgerRepository::new(db);
    let credited = repo.credit_balance(AccountRef::Driver(77), 100).await?;

    assert!(!credited);

    Ok(())
}
