use super::*;

/// Expected: the five seeded statuses in id order
#[tokio::test]
async fn lists_seeded_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);
    let statuses = repo.get_all().await?;

    let ids: Vec<i32> = statuses.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(statuses[4].name, "Cancelled");

    Ok(())
}
