//! Online payment link generation.

pub mod yookassa;

use async_trait::async_trait;
use std::time::Duration;

use crate::server::error::external::ExternalError;

/// Upper bound on a payment link request made while answering PlaceOrder.
pub const PAYMENT_LINK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLinkRequest {
    pub order_id: i32,
    /// Amount to charge in minor units.
    pub amount: i64,
    pub description: String,
    /// Where the provider sends the payer after checkout.
    pub return_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLink {
    pub url: String,
    pub provider_payment_id: String,
}

/// Payment provider able to issue a hosted checkout link.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_payment_link(
        &self,
        request: PaymentLinkRequest,
    ) -> Result<PaymentLink, ExternalError>;
}
