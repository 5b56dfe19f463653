pub use super::admin::Entity as Admin;
pub use super::balance_transaction::Entity as BalanceTransaction;
pub use super::deposit_request::Entity as DepositRequest;
pub use super::driver::Entity as Driver;
pub use super::order::Entity as Order;
pub use super::order_status::Entity as OrderStatus;
pub use super::push_subscription::Entity as PushSubscription;
pub use super::rideshare::Entity as Rideshare;
pub use super::rideshare_booking::Entity as RideshareBooking;
pub use super::user::Entity as User;
pub use super::withdrawal_request::Entity as WithdrawalRequest;
