//! Admin data repository for database operations.

use crate::server::model::account::{Admin, CreateAdminParam};
use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct AdminRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active admin.
    ///
    /// # Returns
    /// - `Ok(Admin)` - The created admin
    /// - `Err(DbErr)` - Database error, including unique violation on `email`
    pub async fn create(&self, param: CreateAdminParam) -> Result<Admin, DbErr> {
        let entity = entity::prelude::Admin::insert(entity::admin::ActiveModel {
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            is_active: ActiveValue::Set(true),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Admin::from_entity(entity))
    }

    pub async fn find_by_id(&self, admin_id: i32) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find_by_id(admin_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Finds an admin by email, compared case-insensitively by lowercasing the input.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DbErr> {
        let entity = entity::prelude::Admin::find()
            .filter(entity::admin::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(Admin::from_entity))
    }

    /// Checks if any admin exists, used by the startup bootstrap.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admins (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Admin::find().count(self.db).await?;

        Ok(count > 0)
    }

    /// Sets `last_login_at` to now.
    pub async fn touch_last_login(&self, admin_id: i32) -> Result<(), DbErr> {
        entity::prelude::Admin::update_many()
            .filter(entity::admin::Column::Id.eq(admin_id))
            .col_expr(
                entity::admin::Column::LastLoginAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
