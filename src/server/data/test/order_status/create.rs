use super::*;

/// Tests creating and then updating a custom status.
///
/// Expected: new id after the seeded ones, update changes name and color
#[tokio::test]
async fn creates_and_updates_custom_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);
    let created = repo
        .create(SaveOrderStatusParam {
            name: "Waiting at arrivals".to_string(),
            color: "#123456".to_string(),
        })
        .await?;
    assert_eq!(created.id, 6);

    let updated = repo
        .update(
            created.id,
            SaveOrderStatusParam {
                name: "Driver waiting".to_string(),
                color: "#654321".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Driver waiting");
    assert_eq!(updated.color, "#654321");

    Ok(())
}

/// Expected: Ok(None) when updating an unknown status
#[tokio::test]
async fn update_returns_none_for_missing_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ledger_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderStatusRepository::new(db);
    let updated = repo
        .update(
            99,
            SaveOrderStatusParam {
                name: "Ghost".to_string(),
                color: "#000000".to_string(),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
