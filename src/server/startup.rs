use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration as StdDuration};
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::{
        auth::AuthService,
        notification::{
            email::EmailChannel, push::PushChannel, telegram::TelegramChannel,
            NotificationChannel, Notifier,
        },
        payment::{yookassa::YooKassaProvider, PaymentProvider},
    },
};

/// Upper bound on any outbound HTTP request.
const HTTP_TIMEOUT: StdDuration = StdDuration::from_secs(10);

/// Sessions expire after this long without a request.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema and the seeded
/// order statuses are in place before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table lives next to the application tables and is created on first
/// start. Cookies are marked secure when the application is served over HTTPS.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let secure = config.app_url.starts_with("https://");

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            SESSION_INACTIVITY_DAYS,
        ))))
}

/// Builds the shared HTTP client.
///
/// Redirects are not followed and every request is bounded by `HTTP_TIMEOUT`.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?)
}

/// Registers every notification channel that has complete configuration.
///
/// A channel that fails to initialize is logged and skipped; notifications are
/// best-effort and never block startup.
pub fn setup_notifier(
    config: &Config,
    db: &DatabaseConnection,
    http_client: &reqwest::Client,
) -> Notifier {
    let mut channels: Vec<Arc<dyn NotificationChannel>> = Vec::new();

    if let Some(telegram) = &config.telegram {
        channels.push(Arc::new(TelegramChannel::new(
            http_client.clone(),
            telegram.bot_token.clone(),
            telegram.chat_id.clone(),
        )));
    }

    if let Some(smtp) = &config.smtp {
        match EmailChannel::new(
            &smtp.server,
            smtp.port,
            smtp.username.clone(),
            smtp.password.clone(),
            &smtp.from,
        ) {
            Ok(channel) => channels.push(Arc::new(channel)),
            Err(e) => tracing::warn!("Email notifications disabled: {}", e),
        }
    }

    if let Some(gateway_url) = &config.push_gateway_url {
        channels.push(Arc::new(PushChannel::new(
            http_client.clone(),
            gateway_url.clone(),
            db.clone(),
        )));
    }

    let notifier = Notifier::new(channels);
    tracing::info!("Notification channels configured: {}", notifier.channel_count());

    notifier
}

pub fn setup_payment_provider(
    config: &Config,
    http_client: &reqwest::Client,
) -> Option<Arc<dyn PaymentProvider>> {
    match &config.yookassa {
        Some(yookassa) => Some(Arc::new(YooKassaProvider::new(
            http_client.clone(),
            yookassa.shop_id.clone(),
            yookassa.secret_key.clone(),
        ))),
        None => {
            tracing::info!("No payment provider configured, prepaid orders get no payment link");
            None
        }
    }
}

/// Creates the configured administrator when the admin table is empty.
pub async fn ensure_admin(
    db: &DatabaseConnection,
    config: &Config,
    notifier: &Notifier,
) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping administrator bootstrap");
        return Ok(());
    };

    AuthService::new(db, notifier)
        .ensure_bootstrap_admin(&admin.email, &admin.password)
        .await?;

    Ok(())
}

/// Allows credentialed requests from the web application's origin only.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: "APP_URL".to_string(),
        reason,
    };

    let origin = url::Url::parse(&config.app_url)
        .map_err(|e| invalid(e.to_string()))?
        .origin()
        .ascii_serialization();
    let origin = HeaderValue::from_str(&origin).map_err(|e| invalid(e.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
