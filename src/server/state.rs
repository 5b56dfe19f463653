//! Application state shared across all request handlers.
//!
//! Built once during startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the database handle is a pool, the
//! notifier and the payment provider are reference counted.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{notification::Notifier, payment::PaymentProvider};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Fan-out to every configured notification channel.
    pub notifier: Notifier,

    /// Online payment provider, `None` when no credentials are configured.
    pub payment: Option<Arc<dyn PaymentProvider>>,

    /// Public base URL of the web application, used for payment return links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        notifier: Notifier,
        payment: Option<Arc<dyn PaymentProvider>>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            notifier,
            payment,
            app_url,
        }
    }
}
