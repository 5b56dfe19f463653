use super::*;

/// Tests inserting an order.
///
/// Expected: Ok with status created, no driver and the given prepay amount
#[tokio::test]
async fn creates_order_in_created_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo.create(place_param(user.id, 100_000), 30_000).await?;

    assert_eq!(order.status_id, ORDER_STATUS_CREATED);
    assert_eq!(order.driver_id, None);
    assert_eq!(order.price, 100_000);
    assert_eq!(order.prepay_amount, 30_000);
    assert_eq!(order.payment_type, PaymentType::Prepay);
    assert!(order.commission_amount.is_none());

    Ok(())
}
