use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Driver};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Driver)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether the default order statuses (ids 1-5) are inserted after table creation.
    seed_order_statuses: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_order_statuses: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: User, Driver and Admin.
    pub fn with_account_tables(self) -> Self {
        self.with_table(User).with_table(Driver).with_table(Admin)
    }

    /// Adds every table the ledger writes to and seeds the default order statuses.
    ///
    /// Includes the account tables, OrderStatus, Order and BalanceTransaction since
    /// ledger rows may reference an order.
    pub fn with_ledger_tables(mut self) -> Self {
        self.seed_order_statuses = true;
        self.with_account_tables()
            .with_table(OrderStatus)
            .with_table(Order)
            .with_table(BalanceTransaction)
    }

    /// Adds all tables required for order workflow operations.
    ///
    /// Equivalent to `with_ledger_tables()` plus the push subscription table read by
    /// the push notification channel.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_ledger_tables().with_table(PushSubscription)
    }

    /// Adds the ledger tables plus withdrawal and deposit requests.
    pub fn with_funds_tables(self) -> Self {
        self.with_ledger_tables()
            .with_table(WithdrawalRequest)
            .with_table(DepositRequest)
    }

    /// Adds Rideshare and RideshareBooking tables.
    pub fn with_rideshare_tables(self) -> Self {
        self.with_table(Rideshare).with_table(RideshareBooking)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then seeds order statuses when one of
    /// the ledger/order helpers was used.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.seed_order_statuses {
            setup.seed_order_statuses().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
