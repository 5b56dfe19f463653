use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{DriverDto, SetActiveDto, UpdateDriverDto, UserDto},
        api::{ErrorDto, PaginatedDto},
    },
    server::{
        controller::param::{DriverStatusParam, PaginationParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::account::{Driver, UpdateDriverParam, User},
        service::account::AccountService,
        state::AppState,
    },
};

pub static ACCOUNT_TAG: &str = "account";

#[utoipa::path(
    get,
    path = "/api/admin/drivers",
    tag = ACCOUNT_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by pending, approved or rejected"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Drivers, newest first", body = PaginatedDto<DriverDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_drivers(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<DriverStatusParam>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (drivers, total) = AccountService::new(&state.db)
        .list_drivers(filter.status, pagination.page, pagination.per_page())
        .await?;
    let items = drivers.into_iter().map(Driver::into_dto).collect();

    Ok((StatusCode::OK, Json(pagination.into_page(items, total))))
}

#[utoipa::path(
    put,
    path = "/api/admin/drivers/{id}",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Driver updated", body = DriverDto),
        (status = 400, description = "Commission rate out of range", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let driver = AccountService::new(&state.db)
        .update_driver(UpdateDriverParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ACCOUNT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Passengers, newest first", body = PaginatedDto<UserDto>),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_users(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (users, total) = AccountService::new(&state.db)
        .list_users(pagination.page, pagination.per_page())
        .await?;
    let items = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(pagination.into_page(items, total))))
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/active",
    tag = ACCOUNT_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = SetActiveDto,
    responses(
        (status = 200, description = "User activated or deactivated", body = UserDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_active(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetActiveDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let user = AccountService::new(&state.db)
        .set_user_active(id, payload.is_active)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
