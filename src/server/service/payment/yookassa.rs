//! YooKassa payment provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{PaymentLink, PaymentLinkRequest, PaymentProvider};
use crate::server::{error::external::ExternalError, util::money::from_minor};

const YOOKASSA_PAYMENTS_URL: &str = "https://api.yookassa.ru/v3/payments";

#[derive(Serialize)]
struct Amount {
    value: String,
    currency: &'static str,
}

#[derive(Serialize)]
struct Confirmation<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    return_url: &'a str,
}

#[derive(Serialize)]
struct Metadata {
    order_id: String,
}

#[derive(Serialize)]
struct CreatePayment<'a> {
    amount: Amount,
    confirmation: Confirmation<'a>,
    capture: bool,
    description: &'a str,
    metadata: Metadata,
}

#[derive(Deserialize)]
struct PaymentConfirmation {
    confirmation_url: Option<String>,
}

#[derive(Deserialize)]
struct PaymentResponse {
    id: String,
    confirmation: Option<PaymentConfirmation>,
}

/// Creates redirect-confirmation payments through the YooKassa REST API.
pub struct YooKassaProvider {
    http_client: reqwest::Client,
    shop_id: String,
    secret_key: String,
}

impl YooKassaProvider {
    pub fn new(http_client: reqwest::Client, shop_id: String, secret_key: String) -> Self {
        Self {
            http_client,
            shop_id,
            secret_key,
        }
    }
}

/// One key per order and amount; YooKassa returns the existing payment on repeat.
fn idempotence_key(request: &PaymentLinkRequest) -> String {
    format!("order-{}-{}", request.order_id, request.amount)
}

#[async_trait]
impl PaymentProvider for YooKassaProvider {
    async fn create_payment_link(
        &self,
        request: PaymentLinkRequest,
    ) -> Result<PaymentLink, ExternalError> {
        let body = CreatePayment {
            amount: Amount {
                value: format!("{:.2}", from_minor(request.amount)),
                currency: "RUB",
            },
            confirmation: Confirmation {
                kind: "redirect",
                return_url: &request.return_url,
            },
            capture: true,
            description: &request.description,
            metadata: Metadata {
                order_id: request.order_id.to_string(),
            },
        };

        let response = self
            .http_client
            .post(YOOKASSA_PAYMENTS_URL)
            .basic_auth(&self.shop_id, Some(&self.secret_key))
            .header("Idempotence-Key", idempotence_key(&request))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExternalError::Provider {
                provider: "yookassa",
                message: format!("{}: {}", status, response.text().await?),
            });
        }

        let payment = response.json::<PaymentResponse>().await?;
        let url = payment
            .confirmation
            .and_then(|c| c.confirmation_url)
            .ok_or(ExternalError::Provider {
                provider: "yookassa",
                message: "response has no confirmation_url".to_string(),
            })?;

        Ok(PaymentLink {
            url,
            provider_payment_id: payment.id,
        })
    }
}
