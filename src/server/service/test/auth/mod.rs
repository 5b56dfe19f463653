use crate::{
    model::account::{AdminLoginDto, DriverStatus, PhoneLoginDto},
    server::{
        data::admin::AdminRepository,
        error::{auth::AuthError, AppError},
        model::account::{CreateDriverParam, CreateUserParam},
        service::{auth::AuthService, notification::Notifier},
        util::password::hash_password,
    },
};
use test_utils::{builder::TestBuilder, factory};

use super::recording_notifier;

mod login;
mod register;

fn user_param(phone: &str) -> CreateUserParam {
    CreateUserParam {
        phone: phone.to_string(),
        name: "Olga".to_string(),
        email: None,
        password_hash: hash_password("secret1"),
    }
}

fn driver_param(phone: &str) -> CreateDriverParam {
    CreateDriverParam {
        phone: phone.to_string(),
        name: "Sergey".to_string(),
        email: None,
        password_hash: hash_password("secret1"),
        car_brand: "Skoda".to_string(),
        car_model: "Octavia".to_string(),
        car_color: "white".to_string(),
        car_number: "A123BC77".to_string(),
    }
}

fn phone_login(phone: &str, password: &str) -> PhoneLoginDto {
    PhoneLoginDto {
        phone: phone.to_string(),
        password: password.to_string(),
    }
}
