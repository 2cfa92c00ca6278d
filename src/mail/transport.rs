use std::fmt::Formatter;

use crate::mail::message::OutboundEmail;
use crate::utils::error_helpers::error_chain_fmt;

/// Anything able to hand an [`OutboundEmail`] to a mail provider.
///
/// One call is one delivery attempt; implementations must not retry.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError>;
}

// Every variant displays only the underlying message; that text is what
// callers of the contact endpoint get to see.
#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    InvalidMessage(String),

    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    // reqwest's own message carries the mail API URL, so only a summary is displayed.
    #[error("{message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = match e.status() {
            Some(status) => format!("Mail API answered {}", status),
            None if e.is_timeout() => "Mail API timed out".to_string(),
            None if e.is_builder() => "Mail API client could not be built".to_string(),
            None => "Mail API could not be reached".to_string(),
        };
        TransportError::Http { message, source: e }
    }
}

impl From<lettre::address::AddressError> for TransportError {
    fn from(e: lettre::address::AddressError) -> Self {
        TransportError::InvalidMessage(format!("Invalid email address: {}", e))
    }
}

impl From<lettre::error::Error> for TransportError {
    fn from(e: lettre::error::Error) -> Self {
        TransportError::InvalidMessage(format!("Failed to build email message: {}", e))
    }
}
