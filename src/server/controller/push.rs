use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        push::{PushSubscribeDto, PushUnsubscribeDto},
    },
    server::{
        controller::ledger_account,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::push::SubscribeParam,
        service::push::PushService,
        state::AppState,
    },
};

pub static PUSH_TAG: &str = "push";

#[utoipa::path(
    post,
    path = "/api/push/subscribe",
    tag = PUSH_TAG,
    request_body = PushSubscribeDto,
    responses(
        (status = 204, description = "Endpoint registered for the current account"),
        (status = 400, description = "Missing endpoint", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PushSubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BalanceHolder])
        .await?;

    PushService::new(&state.db)
        .subscribe(SubscribeParam::from_dto(ledger_account(&account)?, payload)?)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/push/unsubscribe",
    tag = PUSH_TAG,
    request_body = PushUnsubscribeDto,
    responses(
        (status = 204, description = "Endpoint removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PushUnsubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PushService::new(&state.db)
        .unsubscribe(&payload.endpoint)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
