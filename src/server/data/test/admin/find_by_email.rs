use super::*;

/// Expected: lookup ignores surrounding whitespace and letter case of the input
#[tokio::test]
async fn normalizes_email_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::admin::AdminFactory::new(db)
        .email("ops@example.com")
        .build()
        .await?;

    let repo = AdminRepository::new(db);
    let found = repo.find_by_email("  OPS@example.com ").await?;

    assert_eq!(found.map(|a| a.id), Some(admin.id));

    Ok(())
}
