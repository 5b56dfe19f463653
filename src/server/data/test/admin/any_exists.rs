use super::*;

/// Tests the bootstrap check before and after creating an admin.
///
/// Expected: false on an empty table, true after create
#[tokio::test]
async fn reports_admin_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminRepository::new(db);
    assert!(!repo.any_exists().await?);

    repo.create(CreateAdminParam {
        email: "root@example.com".to_string(),
        name: "Root".to_string(),
        password_hash: "salt$hash".to_string(),
    })
    .await?;

    assert!(repo.any_exists().await?);

    Ok(())
}
