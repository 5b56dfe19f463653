use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        rideshare::{
            BookSeatsDto, BookingDto, CancelBookingDto, CreateRideshareDto, RideshareDto,
            UpdateRideshareStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rideshare::{BookSeatsParam, Booking, CreateRideshareParam, Rideshare},
        service::rideshare::RideshareService,
        state::AppState,
    },
};

pub static RIDESHARE_TAG: &str = "rideshare";

#[utoipa::path(
    get,
    path = "/api/rideshares",
    tag = RIDESHARE_TAG,
    responses(
        (status = 200, description = "Active rideshares departing in the future", body = Vec<RideshareDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming_rideshares(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rideshares = RideshareService::new(&state.db, &state.notifier)
        .get_upcoming()
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            rideshares
                .into_iter()
                .map(Rideshare::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/rideshares",
    tag = RIDESHARE_TAG,
    request_body = CreateRideshareDto,
    responses(
        (status = 201, description = "Rideshare published", body = RideshareDto),
        (status = 400, description = "Missing field or seat count out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rideshare(
    State(state): State<AppState>,
    Json(payload): Json<CreateRideshareDto>,
) -> Result<impl IntoResponse, AppError> {
    let rideshare = RideshareService::new(&state.db, &state.notifier)
        .create(CreateRideshareParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(rideshare.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/rideshares/{id}",
    tag = RIDESHARE_TAG,
    params(
        ("id" = i32, Path, description = "Rideshare ID")
    ),
    responses(
        (status = 200, description = "Rideshare details", body = RideshareDto),
        (status = 404, description = "Rideshare not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rideshare(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rideshare = RideshareService::new(&state.db, &state.notifier)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(rideshare.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/rideshares/{id}/bookings",
    tag = RIDESHARE_TAG,
    params(
        ("id" = i32, Path, description = "Rideshare ID")
    ),
    request_body = BookSeatsDto,
    responses(
        (status = 201, description = "Seats booked, response carries the cancel token", body = BookingDto),
        (status = 400, description = "Invalid seat count or missing passenger details", body = ErrorDto),
        (status = 404, description = "Rideshare not found or no longer active", body = ErrorDto),
        (status = 409, description = "Not enough seats left", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_seats(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookSeatsDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = RideshareService::new(&state.db, &state.notifier)
        .book(BookSeatsParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/rideshares/bookings/cancel",
    tag = RIDESHARE_TAG,
    request_body = CancelBookingDto,
    responses(
        (status = 200, description = "Booking cancelled and seats released", body = BookingDto),
        (status = 404, description = "No confirmed booking for this token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Json(payload): Json<CancelBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = RideshareService::new(&state.db, &state.notifier)
        .cancel_booking(payload.cancel_token.trim())
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/rideshares/{id}/status",
    tag = RIDESHARE_TAG,
    params(
        ("id" = i32, Path, description = "Rideshare ID")
    ),
    request_body = UpdateRideshareStatusDto,
    responses(
        (status = 200, description = "Status changed", body = RideshareDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Rideshare not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rideshare_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRideshareStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rideshare = RideshareService::new(&state.db, &state.notifier)
        .update_status(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(rideshare.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/rideshares/{id}/bookings",
    tag = RIDESHARE_TAG,
    params(
        ("id" = i32, Path, description = "Rideshare ID")
    ),
    responses(
        (status = 200, description = "Bookings of the rideshare in booking order", body = Vec<BookingDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Rideshare not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rideshare_bookings(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bookings = RideshareService::new(&state.db, &state.notifier)
        .get_bookings(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(Booking::into_dto).collect::<Vec<_>>()),
    ))
}
