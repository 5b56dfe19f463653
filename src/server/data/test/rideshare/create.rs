use super::*;

/// Expected: Ok with every seat available and status active
#[tokio::test]
async fn creates_with_full_inventory() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RideshareRepository::new(db);
    let rideshare = repo
        .create(CreateRideshareParam {
            route_from: "Moscow".to_string(),
            route_to: "Kazan".to_string(),
            departure_at: Utc::now() + Duration::days(3),
            seats_total: 4,
            price_per_seat: 200_000,
            car_class: None,
            notes: None,
            created_by_name: "Oleg".to_string(),
            created_by_phone: "+79990000003".to_string(),
        })
        .await?;

    assert_eq!(rideshare.seats_total, 4);
    assert_eq!(rideshare.seats_available, 4);
    assert_eq!(rideshare.status, RideshareStatus::Active);

    Ok(())
}
