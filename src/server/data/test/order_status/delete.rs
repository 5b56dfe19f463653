use super::*;

/// Expected: Ok(true) for an existing status, Ok(false) afterwards
#[tokio::test]
async fn deletes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);
    let created = repo
        .create(SaveOrderStatusParam {
            name: "Temporary".to_string(),
            color: "#abcdef".to_string(),
        })
        .await?;

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}
