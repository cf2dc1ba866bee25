//! Error types for subscription strategies.

use thiserror::Error;

/// Errors that can occur while performing a subscription.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    /// The confirmation could not be written to the output sink.
    #[error("Failed to write subscription confirmation: {0}")]
    Output(#[from] std::io::Error),

    /// The strategy refused the subscription.
    #[error("Subscription rejected: {0}")]
    Rejected(String),
}

impl From<String> for SubscriptionError {
    fn from(msg: String) -> Self {
        SubscriptionError::Rejected(msg)
    }
}
