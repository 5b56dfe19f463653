use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_SMTP_PORT: u16 = 465;

/// Credentials for the startup administrator.
pub struct AdminBootstrapConfig {
    pub email: String,
    pub password: String,
}

pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

pub struct YooKassaConfig {
    pub shop_id: String,
    pub secret_key: String,
}

/// Application configuration read from the environment.
///
/// Only `DATABASE_URL` is required. Each integration is enabled when all of its
/// variables are set and skipped otherwise.
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub app_url: String,

    pub admin: Option<AdminBootstrapConfig>,
    pub telegram: Option<TelegramConfig>,
    pub smtp: Option<SmtpConfig>,
    pub push_gateway_url: Option<String>,
    pub yookassa: Option<YooKassaConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e.to_string()))?;

        let app_url = optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        url::Url::parse(&app_url).map_err(|e| invalid("APP_URL", e.to_string()))?;

        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrapConfig { email, password }),
            _ => None,
        };

        let telegram = match (optional("TELEGRAM_BOT_TOKEN"), optional("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        let smtp = match (
            optional("SMTP_SERVER"),
            optional("SMTP_USERNAME"),
            optional("SMTP_PASSWORD"),
            optional("SMTP_FROM"),
        ) {
            (Some(server), Some(username), Some(password), Some(from)) => {
                let port = match optional("SMTP_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .map_err(|e| invalid("SMTP_PORT", e.to_string()))?,
                    None => DEFAULT_SMTP_PORT,
                };
                Some(SmtpConfig {
                    server,
                    port,
                    username,
                    password,
                    from,
                })
            }
            _ => None,
        };

        let push_gateway_url = optional("PUSH_GATEWAY_URL");
        if let Some(gateway) = &push_gateway_url {
            url::Url::parse(gateway).map_err(|e| invalid("PUSH_GATEWAY_URL", e.to_string()))?;
        }

        let yookassa = match (optional("YOOKASSA_SHOP_ID"), optional("YOOKASSA_SECRET_KEY")) {
            (Some(shop_id), Some(secret_key)) => Some(YooKassaConfig {
                shop_id,
                secret_key,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr,
            app_url,
            admin,
            telegram,
            smtp,
            push_gateway_url,
            yookassa,
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn invalid(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason,
    }
}
