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
        balance::{DirectCreditDto, FundsRequestDto, ReviewRequestDto, TransactionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::funds::{DirectCreditParam, FundsRequest, FundsRequestKind, ReviewRequestParam},
        service::funds::FundsService,
        state::AppState,
    },
};

pub static FUNDS_TAG: &str = "funds";

#[utoipa::path(
    get,
    path = "/api/admin/withdrawals",
    tag = FUNDS_TAG,
    responses(
        (status = 200, description = "All withdrawal requests, newest first", body = Vec<FundsRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_withdrawals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, FundsRequestKind::Withdrawal).await
}

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/approve",
    tag = FUNDS_TAG,
    params(
        ("id" = i32, Path, description = "Withdrawal request ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Request completed and balance debited", body = FundsRequestDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already reviewed or balance too low", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, FundsRequestKind::Withdrawal, true, id, payload).await
}

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/reject",
    tag = FUNDS_TAG,
    params(
        ("id" = i32, Path, description = "Withdrawal request ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Request rejected", body = FundsRequestDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, FundsRequestKind::Withdrawal, false, id, payload).await
}

#[utoipa::path(
    get,
    path = "/api/admin/deposits",
    tag = FUNDS_TAG,
    responses(
        (status = 200, description = "All deposit requests, newest first", body = Vec<FundsRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deposits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    list(state, session, FundsRequestKind::Deposit).await
}

#[utoipa::path(
    post,
    path = "/api/admin/deposits/{id}/approve",
    tag = FUNDS_TAG,
    params(
        ("id" = i32, Path, description = "Deposit request ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Request completed and balance credited", body = FundsRequestDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_deposit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, FundsRequestKind::Deposit, true, id, payload).await
}

#[utoipa::path(
    post,
    path = "/api/admin/deposits/{id}/reject",
    tag = FUNDS_TAG,
    params(
        ("id" = i32, Path, description = "Deposit request ID")
    ),
    request_body = ReviewRequestDto,
    responses(
        (status = 200, description = "Request rejected", body = FundsRequestDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_deposit(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    review(state, session, FundsRequestKind::Deposit, false, id, payload).await
}

#[utoipa::path(
    post,
    path = "/api/admin/balance/credit",
    tag = FUNDS_TAG,
    request_body = DirectCreditDto,
    responses(
        (status = 201, description = "Balance credited", body = TransactionDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn direct_credit(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DirectCreditDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let transaction = FundsService::new(&state.db, &state.notifier)
        .direct_credit(DirectCreditParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

async fn list(
    state: AppState,
    session: Session,
    kind: FundsRequestKind,
) -> Result<(StatusCode, Json<Vec<FundsRequestDto>>), AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let requests = FundsService::new(&state.db, &state.notifier)
        .get_all(kind)
        .await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_iter().map(FundsRequest::into_dto).collect()),
    ))
}

async fn review(
    state: AppState,
    session: Session,
    kind: FundsRequestKind,
    approve: bool,
    request_id: i32,
    payload: ReviewRequestDto,
) -> Result<(StatusCode, Json<FundsRequestDto>), AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = FundsService::new(&state.db, &state.notifier);
    let param = ReviewRequestParam::from_dto(request_id, payload);
    let request = if approve {
        service.approve(kind, param).await?
    } else {
        service.reject(kind, param).await?
    };

    Ok((StatusCode::OK, Json(request.into_dto())))
}
