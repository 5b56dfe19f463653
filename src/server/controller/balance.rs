use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        balance::{BalanceDto, CreateDepositDto, CreateWithdrawalDto, FundsRequestDto},
    },
    server::{
        controller::{ledger_account, param::TransactionLimitParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::funds::{CreateFundsRequestParam, FundsRequest, FundsRequestKind},
        service::{funds::FundsService, ledger::LedgerService},
        state::AppState,
    },
};

pub static BALANCE_TAG: &str = "balance";

#[utoipa::path(
    get,
    path = "/api/balance",
    tag = BALANCE_TAG,
    params(
        ("limit" = Option<u64>, Query, description = "Transactions to return (default: 50, max: 200)")
    ),
    responses(
        (status = 200, description = "Current balance with the newest transactions", body = BalanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Account holds no balance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TransactionLimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BalanceHolder])
        .await?;

    let statement = LedgerService::new(&state.db)
        .statement(ledger_account(&account)?, params.limit)
        .await?;

    Ok((StatusCode::OK, Json(statement.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/balance/withdrawals",
    tag = BALANCE_TAG,
    request_body = CreateWithdrawalDto,
    responses(
        (status = 201, description = "Withdrawal request created", body = FundsRequestDto),
        (status = 400, description = "Invalid amount or missing requisites", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Balance does not cover the amount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWithdrawalDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BalanceHolder])
        .await?;

    let param = CreateFundsRequestParam::withdrawal(ledger_account(&account)?, payload)?;
    let request = FundsService::new(&state.db, &state.notifier)
        .request_withdrawal(param)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/balance/withdrawals",
    tag = BALANCE_TAG,
    responses(
        (status = 200, description = "Own withdrawal requests, newest first", body = Vec<FundsRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_withdrawals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    own_requests(state, session, FundsRequestKind::Withdrawal).await
}

#[utoipa::path(
    post,
    path = "/api/balance/deposits",
    tag = BALANCE_TAG,
    request_body = CreateDepositDto,
    responses(
        (status = 201, description = "Deposit request created", body = FundsRequestDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_deposit(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDepositDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BalanceHolder])
        .await?;

    let param = CreateFundsRequestParam::deposit(ledger_account(&account)?, payload)?;
    let request = FundsService::new(&state.db, &state.notifier)
        .request_deposit(param)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/balance/deposits",
    tag = BALANCE_TAG,
    responses(
        (status = 200, description = "Own deposit requests, newest first", body = Vec<FundsRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_deposits(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    own_requests(state, session, FundsRequestKind::Deposit).await
}

async fn own_requests(
    state: AppState,
    session: Session,
    kind: FundsRequestKind,
) -> Result<(StatusCode, Json<Vec<FundsRequestDto>>), AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BalanceHolder])
        .await?;

    let requests = FundsService::new(&state.db, &state.notifier)
        .get_by_account(kind, ledger_account(&account)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_iter().map(FundsRequest::into_dto).collect()),
    ))
}
