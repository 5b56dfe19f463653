//! Type-safe session management wrapper.
//!
//! Sessions are cookie-identified and stored in SQLite by `tower-sessions`. The only
//! value kept in a session is the principal of the logged-in account; everything else
//! is loaded from the database per request.

use tower_sessions::Session;

use crate::server::{error::AppError, model::account::SessionPrincipal};

const SESSION_AUTH_ACCOUNT: &str = "auth:account";

/// Authentication session management.
///
/// Stores which admin, user or driver is logged in and handles logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the principal after a successful login.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Principal stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_principal(&self, principal: SessionPrincipal) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_ACCOUNT, principal).await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(principal))` - Someone is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_principal(&self) -> Result<Option<SessionPrincipal>, AppError> {
        Ok(self.session.get(SESSION_AUTH_ACCOUNT).await?)
    }

    /// Removes all session data. Used on logout and for stale principals.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
