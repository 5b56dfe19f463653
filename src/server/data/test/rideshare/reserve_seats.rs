use super::*;

/// Tests reserving seats within and beyond the remaining inventory.
///
/// Expected: 3 of 4 succeeds leaving 1, then 2 more fails and leaves 1
#[tokio::test]
async fn reserves_only_available_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::rideshare::RideshareFactory::new(db)
        .seats_total(4)
        .build()
        .await?;

    let repo = RideshareRepository::new(db);
    assert!(repo.reserve_seats(rideshare.id, 3).await?);
    assert!(!repo.reserve_seats(rideshare.id, 2).await?);

    let reloaded = repo.find_by_id(rideshare.id).await?.unwrap();
    assert_eq!(reloaded.seats_available, 1);

    Ok(())
}

/// Expected: Ok(false) for a cancelled rideshare even with seats left
#[tokio::test]
async fn refuses_inactive_rideshare() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::rideshare::RideshareFactory::new(db)
        .status("cancelled")
        .build()
        .await?;

    let repo = RideshareRepository::new(db);
    assert!(!repo.reserve_seats(rideshare.id, 1).await?);

    Ok(())
}
