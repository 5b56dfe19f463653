use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        account::{self, ACCOUNT_TAG},
        auth::{self, AUTH_TAG},
        balance::{self, BALANCE_TAG},
        funds::{self, FUNDS_TAG},
        order::{self, ORDER_TAG},
        push::{self, PUSH_TAG},
        rideshare::{self, RIDESHARE_TAG},
        status::{self, STATUS_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Transferboard API", description = "Transfer and rideshare marketplace"),
    tags(
        (name = AUTH_TAG, description = "Registration, login and sessions"),
        (name = BALANCE_TAG, description = "Own balance, withdrawals and deposits"),
        (name = FUNDS_TAG, description = "Administrator review of funds requests"),
        (name = ORDER_TAG, description = "Transfer orders"),
        (name = STATUS_TAG, description = "Order status lookup"),
        (name = RIDESHARE_TAG, description = "Shared rides and seat bookings"),
        (name = ACCOUNT_TAG, description = "Administrator management of drivers and passengers"),
        (name = PUSH_TAG, description = "Browser push subscriptions"),
    )
)]
struct ApiDoc;

/// API routes with the OpenAPI document served through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register_user))
        .routes(routes!(auth::login_user))
        .routes(routes!(auth::register_driver))
        .routes(routes!(auth::login_driver))
        .routes(routes!(auth::login_admin))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_current_account))
        // Balance
        .routes(routes!(balance::get_balance))
        .routes(routes!(
            balance::request_withdrawal,
            balance::get_own_withdrawals
        ))
        .routes(routes!(balance::request_deposit, balance::get_own_deposits))
        // Funds review
        .routes(routes!(funds::get_withdrawals))
        .routes(routes!(funds::approve_withdrawal))
        .routes(routes!(funds::reject_withdrawal))
        .routes(routes!(funds::get_deposits))
        .routes(routes!(funds::approve_deposit))
        .routes(routes!(funds::reject_deposit))
        .routes(routes!(funds::direct_credit))
        // Orders
        .routes(routes!(order::place_order, order::get_own_orders))
        .routes(routes!(order::get_available_orders))
        .routes(routes!(order::get_order))
        .routes(routes!(order::accept_order))
        .routes(routes!(order::cancel_order))
        .routes(routes!(order::get_paginated_orders))
        .routes(routes!(order::update_order))
        // Order statuses
        .routes(routes!(status::get_statuses))
        .routes(routes!(status::create_status))
        .routes(routes!(status::update_status, status::delete_status))
        // Rideshares
        .routes(routes!(
            rideshare::get_upcoming_rideshares,
            rideshare::create_rideshare
        ))
        .routes(routes!(rideshare::get_rideshare))
        .routes(routes!(rideshare::book_seats))
        .routes(routes!(rideshare::cancel_booking))
        .routes(routes!(rideshare::update_rideshare_status))
        .routes(routes!(rideshare::get_rideshare_bookings))
        // Accounts
        .routes(routes!(account::get_paginated_drivers))
        .routes(routes!(account::update_driver))
        .routes(routes!(account::get_paginated_users))
        .routes(routes!(account::set_user_active))
        // Push
        .routes(routes!(push::subscribe))
        .routes(routes!(push::unsubscribe))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
