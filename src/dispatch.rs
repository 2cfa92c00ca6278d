//! src/dispatch.rs

use std::sync::Arc;

use crate::config::MailSettings;
use crate::domain::contact_submission::{ContactSubmission, SubmissionResult};
use crate::mail::{MailTransport, OutboundEmail, TransportError};

pub const GENERIC_FAILURE: &str = "An error occurred while sending the email";

/// Turns a validated submission into exactly one outbound email.
///
/// Holds no mutable state, so one instance serves every request.
pub struct ContactDispatcher {
    transport: Arc<dyn MailTransport>,
    recipient: String,
    expose_transport_errors: bool,
}

impl ContactDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>, settings: &MailSettings) -> Self {
        Self {
            transport,
            recipient: settings.recipient.clone(),
            expose_transport_errors: settings.expose_transport_errors,
        }
    }

    #[tracing::instrument(
        name = "Dispatching contact submission",
        skip(self, submission),
        fields(
            submitter_email = %submission.email,
            submitter_name = %submission.name.as_ref(),
        )
    )]
    pub async fn dispatch(&self, submission: ContactSubmission) -> SubmissionResult {
        match self.deliver(&submission).await {
            Ok(()) => {
                tracing::info!("Contact message handed to the mail transport");
                SubmissionResult::Accepted
            }
            Err(e) => {
                tracing::error!(
                    error.message = %e,
                    error.cause_chain = ?e,
                    "Failed to send contact message"
                );
                SubmissionResult::Failed {
                    reason: self.reason(&e),
                }
            }
        }
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        let email = OutboundEmail::from_submission(submission, &self.recipient)?;
        self.transport.send(&email).await
    }

    fn reason(&self, e: &TransportError) -> String {
        let message = e.to_string();
        if self.expose_transport_errors && !message.trim().is_empty() {
            message
        } else {
            GENERIC_FAILURE.to_string()
        }
    }
}
