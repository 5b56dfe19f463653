use super::*;

/// Tests the seat counter over a sequence of bookings.
///
/// Expected: 3 then 1 seats booked on a 4-seat ride, a further 1-seat booking fails with
/// InsufficientSeats reporting 0 available
#[tokio::test]
async fn fills_four_seats() -> Result<(), AppError> {
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
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    let first = service.book(book_param(rideshare.id, 3)).await?;
    assert_eq!(first.status, BookingStatus::Confirmed);
    assert_eq!(first.cancel_token.len(), 32);
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 1);

    service.book(book_param(rideshare.id, 1)).await?;
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 0);

    let result = service.book(book_param(rideshare.id, 1)).await;
    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::InsufficientSeats {
            requested: 1,
            available: 0
        }))
    ));

    Ok(())
}

/// Tests concurrent bookings racing for the last seats.
///
/// Expected: exactly one of two 2-seat bookings on a 3-seat ride succeeds and the
/// booked seats plus available seats equal the total
#[tokio::test]
async fn concurrent_bookings_never_oversell() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::rideshare::RideshareFactory::new(db)
        .seats_total(3)
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    let (a, b) = tokio::join!(
        service.book(book_param(rideshare.id, 2)),
        service.book(book_param(rideshare.id, 2))
    );
    assert!(a.is_ok() != b.is_ok());

    let stored = service.get_by_id(rideshare.id).await?;
    let booked: i32 = service
        .get_bookings(rideshare.id)
        .await?
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.seats_count)
        .sum();
    assert_eq!(stored.seats_available, 1);
    assert_eq!(booked + stored.seats_available, stored.seats_total);

    Ok(())
}

/// Expected: Err(RideshareNotFound) for cancelled and unknown rides
#[tokio::test]
async fn rejects_inactive_rideshare() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::rideshare::RideshareFactory::new(db)
        .status(RideshareStatus::Cancelled.as_str())
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    for id in [rideshare.id, 999] {
        let result = service.book(book_param(id, 1)).await;
        assert!(matches!(
            result,
            Err(AppError::WorkflowErr(WorkflowError::RideshareNotFound(_)))
        ));
    }
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 4);

    Ok(())
}

/// Expected: staff alert plus a passenger email carrying the cancel token
#[tokio::test]
async fn emails_cancel_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::create_rideshare(db).await?;
    let (notifier, mut rx) = recording_notifier();

    let booking = RideshareService::new(db, &notifier)
        .book(book_param(rideshare.id, 2))
        .await?;

    let notification = rx.recv().await.unwrap();
    assert!(notification.notify_staff);
    assert_eq!(notification.email.as_deref(), Some("pavel@example.com"));
    assert!(notification.body.contains(&booking.cancel_token));

    Ok(())
}
