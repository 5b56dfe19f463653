use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        account::{
            AccountDto, AdminDto, AdminLoginDto, DriverDto, PhoneLoginDto, RegisterDriverDto,
            RegisterUserDto, UserDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::account::{CreateDriverParam, CreateUserParam, SessionPrincipal},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/users/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Passenger registered and logged in", body = UserDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.notifier)
        .register_user(CreateUserParam::from_dto(payload)?)
        .await?;

    AuthSession::new(&session)
        .set_principal(SessionPrincipal::User(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/users/login",
    tag = AUTH_TAG,
    request_body = PhoneLoginDto,
    responses(
        (status = 200, description = "Passenger logged in", body = UserDto),
        (status = 401, description = "Wrong phone or password", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PhoneLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.notifier)
        .login_user(payload)
        .await?;

    AuthSession::new(&session)
        .set_principal(SessionPrincipal::User(user.id))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/drivers/register",
    tag = AUTH_TAG,
    request_body = RegisterDriverDto,
    responses(
        (status = 201, description = "Driver registered, pending approval", body = DriverDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 409, description = "Phone number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_driver(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDriverDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthService::new(&state.db, &state.notifier)
        .register_driver(CreateDriverParam::from_dto(payload)?)
        .await?;

    AuthSession::new(&session)
        .set_principal(SessionPrincipal::Driver(driver.id))
        .await?;

    Ok((StatusCode::CREATED, Json(driver.into_dto())))
}

/// Pending drivers may log in to follow their application; accepting orders still
/// requires approval.
#[utoipa::path(
    post,
    path = "/api/auth/drivers/login",
    tag = AUTH_TAG,
    request_body = PhoneLoginDto,
    responses(
        (status = 200, description = "Driver logged in", body = DriverDto),
        (status = 401, description = "Wrong phone or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_driver(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PhoneLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let driver = AuthService::new(&state.db, &state.notifier)
        .login_driver(payload)
        .await?;

    AuthSession::new(&session)
        .set_principal(SessionPrincipal::Driver(driver.id))
        .await?;

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Administrator logged in", body = AdminDto),
        (status = 401, description = "Wrong email or password", body = ErrorDto),
        (status = 403, description = "Account deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_admin(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthService::new(&state.db, &state.notifier)
        .login_admin(payload)
        .await?;

    AuthSession::new(&session)
        .set_principal(SessionPrincipal::Admin(admin.id))
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Account behind the current session", body = AccountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
