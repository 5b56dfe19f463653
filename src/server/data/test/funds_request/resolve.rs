use super::*;

/// Tests that a request leaves pending exactly once.
///
/// Expected: first resolve Ok(true) with the note stored, second Ok(false)
#[tokio::test]
async fn resolves_pending_request_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_funds_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = FundsRequestRepository::new(db);
    let request = repo
        .create(
            FundsRequestKind::Deposit,
            CreateFundsRequestParam {
                account: AccountRef::User(user.id),
                amount: 5_000,
                details: "cash".to_string(),
            },
        )
        .await?;

    let first = repo
        .resolve(
            FundsRequestKind::Deposit,
            request.id,
            RequestStatus::Completed,
            Some("received".to_string()),
        )
        .await?;
    let second = repo
        .resolve(
            FundsRequestKind::Deposit,
            request.id,
            RequestStatus::Rejected,
            None,
        )
        .await?;

    assert!(first);
    assert!(!second);

    let reloaded = repo
        .find_by_id(FundsRequestKind::Deposit, request.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.status, RequestStatus::Completed);
    assert_eq!(reloaded.admin_note.as_deref(), Some("received"));

    Ok(())
}
