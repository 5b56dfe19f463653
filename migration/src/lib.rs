pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_driver_table;
mod m20260301_000003_create_admin_table;
mod m20260301_000004_create_order_status_table;
mod m20260301_000005_create_order_table;
mod m20260301_000006_create_balance_transaction_table;
mod m20260302_000007_create_rideshare_table;
mod m20260302_000008_create_rideshare_booking_table;
mod m20260303_000009_create_withdrawal_request_table;
mod m20260303_000010_create_deposit_request_table;
mod m20260304_000011_create_push_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_driver_table::Migration),
            Box::new(m20260301_000003_create_admin_table::Migration),
            Box::new(m20260301_000004_create_order_status_table::Migration),
            Box::new(m20260301_000005_create_order_table::Migration),
            Box::new(m20260301_000006_create_balance_transaction_table::Migration),
            Box::new(m20260302_000007_create_rideshare_table::Migration),
            Box::new(m20260302_000008_create_rideshare_booking_table::Migration),
            Box::new(m20260303_000009_create_withdrawal_request_table::Migration),
            Box::new(m20260303_000010_create_deposit_request_table::Migration),
            Box::new(m20260304_000011_create_push_subscription_table::Migration),
        ]
    }
}
