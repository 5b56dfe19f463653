//! Passenger emails over SMTP.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{Notification, NotificationChannel};
use crate::server::error::external::ExternalError;

fn smtp_error(e: impl std::fmt::Display) -> ExternalError {
    ExternalError::Provider {
        provider: "smtp",
        message: e.to_string(),
    }
}

/// Sends notifications that carry an email address.
pub struct EmailChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl EmailChannel {
    /// Builds a TLS relay transport.
    ///
    /// # Returns
    /// - `Ok(EmailChannel)` - Transport configured
    /// - `Err(ExternalError::Provider)` - Invalid server name or sender address
    pub fn new(
        server: &str,
        port: u16,
        username: String,
        password: String,
        from: &str,
    ) -> Result<Self, ExternalError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
            .map_err(smtp_error)?
            .port(port)
            .credentials(Credentials::new(username, password))
            .build();
        let from = from.parse::<Mailbox>().map_err(smtp_error)?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn send(&self, notification: &Notification) -> Result<(), ExternalError> {
        let Some(address) = &notification.email else {
            return Ok(());
        };

        let message = Message::builder()
            .from(self.from.clone())
            .to(address.parse::<Mailbox>().map_err(smtp_error)?)
            .subject(notification.title.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(smtp_error)?;

        self.transport.send(message).await.map_err(smtp_error)?;

        Ok(())
    }
}
