use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    },
    server::{
        controller::param::PaginationParam,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            account::Account,
            order::{Order, PlaceOrderParam, UpdateOrderParam},
        },
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "order";

fn order_service(state: &AppState) -> OrderService<'_> {
    OrderService::new(
        &state.db,
        &state.notifier,
        state.payment.as_deref(),
        &state.app_url,
    )
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed, with a payment link when prepaid", body = OrderDto),
        (status = 400, description = "Missing field or invalid amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a passenger", body = ErrorDto),
        (status = 409, description = "Balance does not cover the price", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::User])
        .await?;

    let Account::User(user) = account else {
        return Err(AuthError::AccessDenied(
            account.principal().to_string(),
            "only passengers place orders".to_string(),
        )
        .into());
    };

    let param = PlaceOrderParam::from_dto(user.id, payload)?;
    let order = order_service(&state).place(param).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Orders placed by the passenger or assigned to the driver", body = Vec<OrderDto>),
        (status = 400, description = "Administrators use the admin listing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = order_service(&state).get_for_account(&account).await?;

    Ok((StatusCode::OK, Json(into_dtos(orders))))
}

#[utoipa::path(
    get,
    path = "/api/orders/available",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Open orders, oldest first", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Driver not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApprovedDriver])
        .await?;

    let orders = order_service(&state).get_available().await?;

    Ok((StatusCode::OK, Json(into_dtos(orders))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found or not visible", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = order_service(&state).get_by_id(id, &account).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/accept",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order assigned with commission split", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Driver not approved", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order already taken or no longer open", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApprovedDriver])
        .await?;
    let Account::Driver(driver) = account else {
        return Err(AuthError::AccessDenied(
            account.principal().to_string(),
            "only drivers accept orders".to_string(),
        )
        .into());
    };

    let order = order_service(&state).accept(id, &driver).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order cancelled, balance payment refunded", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Order belongs to someone else", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order already completed or cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = order_service(&state).cancel(id, &account).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "All orders, newest first", body = PaginatedDto<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_orders(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let page = order_service(&state)
        .get_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Unknown status, cancel by status, or price change not allowed", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order is cancelled or changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let order = order_service(&state)
        .update(UpdateOrderParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

fn into_dtos(orders: Vec<Order>) -> Vec<OrderDto> {
    orders.into_iter().map(Order::into_dto).collect()
}
