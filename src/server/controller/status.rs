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
        status::{OrderStatusDto, SaveOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::status::{OrderStatus, SaveOrderStatusParam},
        service::status::OrderStatusService,
        state::AppState,
    },
};

pub static STATUS_TAG: &str = "status";

#[utoipa::path(
    get,
    path = "/api/statuses",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "All order statuses", body = Vec<OrderStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statuses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let statuses = OrderStatusService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            statuses
                .into_iter()
                .map(OrderStatus::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    post,
    path = "/api/admin/statuses",
    tag = STATUS_TAG,
    request_body = SaveOrderStatusDto,
    responses(
        (status = 201, description = "Status created", body = OrderStatusDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = OrderStatusService::new(&state.db)
        .create(SaveOrderStatusParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(status.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/statuses/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Order status ID")
    ),
    request_body = SaveOrderStatusDto,
    responses(
        (status = 200, description = "Status updated", body = OrderStatusDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = OrderStatusService::new(&state.db)
        .update(id, SaveOrderStatusParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/statuses/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = i32, Path, description = "Order status ID")
    ),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 400, description = "Built-in status or still used by orders", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Status not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    OrderStatusService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
