use super::*;

/// Expected: Ok with a confirmed booking findable by its token
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::create_rideshare(db).await?;

    let repo = RideshareBookingRepository::new(db);
    let booking = repo
        .create(NewBookingParam {
            booking: BookSeatsParam {
                rideshare_id: rideshare.id,
                seats_count: 2,
                passenger_name: "Maria".to_string(),
                passenger_phone: "+79990000004".to_string(),
                passenger_email: None,
            },
            cancel_token: "abcDEF0123456789abcDEF0123456789".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.seats_count, 2);

    let found = repo.find_by_token(&booking.cancel_token).await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));

    let listed = repo.get_by_rideshare(rideshare.id).await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}
