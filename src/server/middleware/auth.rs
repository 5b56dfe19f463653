use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{admin::AdminRepository, driver::DriverRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::account::{Account, SessionPrincipal},
};

/// Role checks an endpoint can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    User,
    /// Any driver, including pending and deactivated ones.
    Driver,
    /// Driver allowed to take orders: approved and active.
    ApprovedDriver,
    /// User or driver, i.e. an account with a balance.
    BalanceHolder,
}

/// Resolves the session principal to an account and checks it against permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in account and checks every permission.
    ///
    /// Deactivated users and admins are treated as logged out and their session is
    /// cleared. Drivers keep their session whatever their status; `ApprovedDriver`
    /// gates the order endpoints.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account satisfying all permissions
    /// - `Err(AuthError::NotLoggedIn)` - No principal in session
    /// - `Err(AuthError::AccountNotInDatabase)` - Principal refers to a deleted account
    /// - `Err(AuthError::AccountDisabled)` - User or admin was deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(principal) = auth_session.get_principal().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let account = match principal {
            SessionPrincipal::Admin(id) => AdminRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(Account::Admin),
            SessionPrincipal::User(id) => UserRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(Account::User),
            SessionPrincipal::Driver(id) => DriverRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(Account::Driver),
        };
        let Some(account) = account else {
            auth_session.clear().await;
            return Err(AuthError::AccountNotInDatabase(principal.to_string()).into());
        };

        let disabled = match &account {
            Account::Admin(admin) => !admin.is_active,
            Account::User(user) => !user.is_active,
            Account::Driver(_) => false,
        };
        if disabled {
            auth_session.clear().await;
            return Err(AuthError::AccountDisabled.into());
        }

        for permission in permissions {
            let allowed = match (permission, &account) {
                (Permission::Admin, Account::Admin(_)) => true,
                (Permission::User, Account::User(_)) => true,
                (Permission::Driver, Account::Driver(_)) => true,
                (Permission::ApprovedDriver, Account::Driver(driver)) => {
                    driver.can_accept_orders()
                }
                (Permission::BalanceHolder, Account::User(_) | Account::Driver(_)) => true,
                _ => false,
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    principal.to_string(),
                    format!("missing {:?} permission", permission),
                )
                .into());
            }
        }

        Ok(account)
    }
}
