use sea_orm::DatabaseConnection;

use crate::{
    model::account::{AdminLoginDto, PhoneLoginDto},
    server::{
        data::{admin::AdminRepository, driver::DriverRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::account::{
            Admin, CreateAdminParam, CreateDriverParam, CreateUserParam, Driver, User,
        },
        service::notification::{message, Notifier},
        util::password::{hash_password, verify_password},
    },
};

/// Registration and password login for all three account kinds.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifier` - Used to alert staff about new driver registrations
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    /// Registers a passenger with a zero balance.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account, active immediately
    /// - `Err(AuthError::PhoneAlreadyRegistered)` - Phone already used by a passenger
    pub async fn register_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);
        if repo.find_by_phone(&param.phone).await?.is_some() {
            return Err(AuthError::PhoneAlreadyRegistered.into());
        }

        let user = repo.create(param).await?;
        tracing::info!("Registered user {} ({})", user.id, user.phone);

        Ok(user)
    }

    /// Registers a driver. The account stays pending and inactive until an admin
    /// approves it.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The new pending driver
    /// - `Err(AuthError::PhoneAlreadyRegistered)` - Phone already used by a driver
    pub async fn register_driver(&self, param: CreateDriverParam) -> Result<Driver, AppError> {
        let repo = DriverRepository::new(self.db);
        if repo.find_by_phone(&param.phone).await?.is_some() {
            return Err(AuthError::PhoneAlreadyRegistered.into());
        }

        let driver = repo.create(param).await?;
        tracing::info!("Registered driver {} ({})", driver.id, driver.phone);

        self.notifier.dispatch(message::driver_registered(&driver));

        Ok(driver)
    }

    /// # Returns
    /// - `Ok(User)` - Credentials matched an active passenger
    /// - `Err(AuthError::InvalidCredentials)` - Unknown phone or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Passenger was deactivated by an admin
    pub async fn login_user(&self, dto: PhoneLoginDto) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_phone(dto.phone.trim())
            .await?
            .filter(|user| verify_password(&dto.password, &user.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        Ok(user)
    }

    /// Drivers may log in while pending or deactivated to follow their application;
    /// accepting orders is gated separately.
    pub async fn login_driver(&self, dto: PhoneLoginDto) -> Result<Driver, AppError> {
        let driver = DriverRepository::new(self.db)
            .find_by_phone(dto.phone.trim())
            .await?
            .filter(|driver| verify_password(&dto.password, &driver.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(driver)
    }

    /// Logs an admin in and records the login time.
    pub async fn login_admin(&self, dto: AdminLoginDto) -> Result<Admin, AppError> {
        let repo = AdminRepository::new(self.db);
        let admin = repo
            .find_by_email(&dto.email)
            .await?
            .filter(|admin| verify_password(&dto.password, &admin.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        if !admin.is_active {
            return Err(AuthError::AccountDisabled.into());
        }

        repo.touch_last_login(admin.id).await?;
        tracing::info!("Admin {} logged in", admin.email);

        Ok(admin)
    }

    /// Creates the first admin when none exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(Admin))` - Admin created by this call
    /// - `Ok(None)` - An admin already exists
    pub async fn ensure_bootstrap_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Admin>, AppError> {
        let repo = AdminRepository::new(self.db);
        if repo.any_exists().await? {
            return Ok(None);
        }

        let admin = repo
            .create(CreateAdminParam {
                email: email.trim().to_lowercase(),
                name: "Administrator".to_string(),
                password_hash: hash_password(password),
            })
            .await?;
        tracing::info!("Created bootstrap admin {}", admin.email);

        Ok(Some(admin))
    }
}
