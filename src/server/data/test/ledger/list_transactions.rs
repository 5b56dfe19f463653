use super::*;

fn entry(account: AccountRef, amount: i64, description: &str) -> NewTransactionParam {
    NewTransactionParam {
        account,
        amount,
        kind: if amount < 0 {
            TransactionKind::Payment
        } else {
            TransactionKind::Deposit
        },
        description: description.to_string(),
        order_id: None,
    }
}

/// Tests listing an account's transactions.
///
/// Verifies newest-first ordering, the limit, and that rows of other accounts are
/// excluded.
///
/// Expected: Ok with the two newest rows of the user, newest first
#[tokio::test]
async fn lists_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let account = AccountRef::User(user.id);

    let repo = LedgerRepository::new(db);
    repo.insert_transaction(entry(account, 1_000, "first")).await?;
    repo.insert_transaction(entry(account, -300, "second")).await?;
    repo.insert_transaction(entry(account, 200, "third")).await?;
    repo.insert_transaction(entry(AccountRef::User(other.id), 5, "other"))
        .await?;

    let rows = repo.list_transactions(account, 2).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "third");
    assert_eq!(rows[1].description, "second");
    assert_eq!(rows[1].amount, -300);
    assert_eq!(rows[1].kind, TransactionKind::Payment);
    assert!(rows.iter().all(|row| row.account == account));

    Ok(())
}
