use super::*;

/// Tests creating one request of each kind for different account kinds.
///
/// Expected: pending requests, listed per kind and per account
#[tokio::test]
async fn creates_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_funds_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let driver = factory::create_driver(db).await?;

    let repo = FundsRequestRepository::new(db);
    let withdrawal = repo
        .create(
            FundsRequestKind::Withdrawal,
            CreateFundsRequestParam {
                account: AccountRef::Driver(driver.id),
                amount: 10_000,
                details: "card 2200 ****".to_string(),
            },
        )
        .await?;
    let deposit = repo
        .create(
            FundsRequestKind::Deposit,
            CreateFundsRequestParam {
                account: AccountRef::User(user.id),
                amount: 5_000,
                details: "sbp".to_string(),
            },
        )
        .await?;

    assert_eq!(withdrawal.status, RequestStatus::Pending);
    assert_eq!(withdrawal.account, AccountRef::Driver(driver.id));
    assert_eq!(withdrawal.details, "card 2200 ****");
    assert_eq!(deposit.kind, FundsRequestKind::Deposit);

    let withdrawals = repo.get_all(FundsRequestKind::Withdrawal).await?;
    assert_eq!(withdrawals.len(), 1);
    let user_deposits = repo
        .get_by_account(FundsRequestKind::Deposit, AccountRef::User(user.id))
        .await?;
    assert_eq!(user_deposits.len(), 1);
    let user_withdrawals = repo
        .get_by_account(FundsRequestKind::Withdrawal, AccountRef::User(user.id))
        .await?;
    assert!(user_withdrawals.is_empty());

    Ok(())
}
