use super::*;

/// Tests that an admin status change leaves the seat counter and bookings as they are.
///
/// Expected: rideshare cancelled with 1 seat still available, booking still confirmed,
/// further bookings refused with RideshareNotFound
#[tokio::test]
async fn cancels_without_touching_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (rideshare, _) = factory::helpers::create_rideshare_with_booking(db, 4, 3).await?;
    let notifier = Notifier::default();
    let service = RideshareService::new(db, &notifier);

    let updated = service
        .update_status(rideshare.id, RideshareStatus::Cancelled)
        .await?;
    assert_eq!(updated.status, RideshareStatus::Cancelled);
    assert_eq!(updated.seats_available, 1);

    let bookings = service.get_bookings(rideshare.id).await?;
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);

    let result = service.book(book_param(rideshare.id, 1)).await;
    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::RideshareNotFound(id))) if id == rideshare.id
    ));

    Ok(())
}

/// Expected: Err(RideshareNotFound) for an unknown id
#[tokio::test]
async fn unknown_rideshare() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rideshare_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = Notifier::default();

    let result = RideshareService::new(db, &notifier)
        .update_status(999, RideshareStatus::Completed)
        .await;

    assert!(matches!(
        result,
        Err(AppError::WorkflowErr(WorkflowError::RideshareNotFound(999)))
    ));

    Ok(())
}
