use super::*;

fn order_entry(
    account: AccountRef,
    order_id: i32,
    amount: i64,
    kind: TransactionKind,
) -> NewTransactionParam {
    NewTransactionParam {
        account,
        amount,
        kind,
        description: format!("order #{}", order_id),
        order_id: Some(order_id),
    }
}

/// Tests netting the payment and refund rows of one order.
///
/// Rows of other orders and non-order kinds are left out of the sum.
///
/// Expected: Ok(-30000) after a 50000 payment and a 20000 refund
#[tokio::test]
async fn nets_payments_and_refunds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, order) = factory::helpers::create_order_with_user(db).await?;
    let other_order = factory::order::create_order(db, user.id).await?;
    let account = AccountRef::User(user.id);

    let repo = LedgerRepository::new(db);
    repo.insert_transaction(order_entry(account, order.id, -50_000, TransactionKind::Payment))
        .await?;
    repo.insert_transaction(order_entry(account, order.id, 20_000, TransactionKind::Refund))
        .await?;
    repo.insert_transaction(order_entry(account, order.id, 7_000, TransactionKind::Deposit))
        .await?;
    repo.insert_transaction(order_entry(
        account,
        other_order.id,
        -10_000,
        TransactionKind::Payment,
    ))
    .await?;

    assert_eq!(repo.order_net_amount(account, order.id).await?, -30_000);

    Ok(())
}

/// Expected: Ok(0) for an order without ledger rows
#[tokio::test]
async fn zero_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, order) = factory::helpers::create_order_with_user(db).await?;

    let net = LedgerRepository::new(db)
        .order_net_amount(AccountRef::User(user.id), order.id)
        .await?;

    assert_eq!(net, 0);

    Ok(())
}
