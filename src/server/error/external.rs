use thiserror::Error;

/// Failures talking to notification channels and payment providers.
///
/// Never converted into `AppError`: callers log these with `tracing::warn!` and carry on.
#[derive(Error, Debug)]
pub enum ExternalError {
    /// Transport-level failure reaching the provider.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Provider answered with an error or an unexpected payload.
    #[error("{provider} rejected the request: {message}")]
    Provider {
        /// Channel or provider name.
        provider: &'static str,
        /// Response status or error text.
        message: String,
    },

    /// Reading recipients from the database failed.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
