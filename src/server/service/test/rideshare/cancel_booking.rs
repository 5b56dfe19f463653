use super::*;

/// Tests that cancelling returns the seats exactly once.
///
/// Expected: seats back to 4 after cancel, repeat fails with BookingNotFound and leaves
/// the counter alone
#[tokio::test]
async fn releases_seats_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (rideshare, booking) = factory::helpers::create_rideshare_with_booking(db, 4, 3).await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    let cancelled = service.cancel_booking(&booking.cancel_token).await?;
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 4);

    let repeat = service.cancel_booking(&booking.cancel_token).await;
    assert!(matches!(
        repeat,
        Err(AppError::WorkflowErr(WorkflowError::BookingNotFound))
    ));
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 4);

    Ok(())
}

/// Expected: Err(BookingNotFound) for a token nobody holds
#[tokio::test]
async fn unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();

    let result = RideshareService::new(db, &notifier)
        .cancel_booking("no-such-token")
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::BookingNotFound))
    ));

    Ok(())
}

/// Tests a booked-out ride reopening after a cancellation.
///
/// Expected: a new booking succeeds once seats are returned
#[tokio::test]
async fn rebook_after_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (rideshare, booking) = factory::helpers::create_rideshare_with_booking(db, 2, 2).await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    assert!(service.book(book_param(rideshare.id, 1)).await.is_err());
    service.cancel_booking(&booking.cancel_token).await?;
    service.book(book_param(rideshare.id, 2)).await?;

    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 0);

    Ok(())
}

/// Tests a cancellation whose seats would push the counter past the total.
///
/// Expected: Err(InternalError), booking still confirmed and seat counter untouched
#[tokio::test]
async fn rolls_back_when_seats_overflow() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let rideshare = factory::rideshare::RideshareFactory::new(db)
        .seats_total(4)
        .seats_available(4)
        .build()
        .await?;
    let booking = factory::rideshare_booking::RideshareBookingFactory::new(db, rideshare.id)
        .seats_count(2)
        .build()
        .await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    let result = service.cancel_booking(&booking.cancel_token).await;
    assert!(matches!(result, Err(AppError::InternalError(_))));

    let bookings = service.get_bookings(rideshare.id).await?;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);
    assert_eq!(service.get_by_id(rideshare.id).await?.seats_available, 4);

    Ok(())
}
