use crate::domain::contact_submission::ContactSubmission;
use crate::domain::validation::{validate, ContactDraft, ContactField, FieldErrors};
use crate::form::api_client::{ApiError, ContactApi};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("The form has invalid fields: {0}")]
    Invalid(FieldErrors),
}

/// State of one contact form instance.
///
/// The `submitting` flag is set between [`begin_submit`](Self::begin_submit)
/// and [`finish_submit`](Self::finish_submit); while it is set no second
/// submission can start.
#[derive(Debug, Default)]
pub struct ContactFormController {
    draft: ContactDraft,
    errors: FieldErrors,
    submitting: bool,
    status: FormStatus,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Text of the success or error banner, if one should be shown.
    pub fn banner(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Success(message) | FormStatus::Error(message) => Some(message.as_str()),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.draft.name = value,
            ContactField::Email => self.draft.email = value,
            ContactField::Subject => self.draft.subject = value,
            ContactField::Message => self.draft.message = value,
        }
        if !self.submitting {
            self.status = FormStatus::Idle;
        }
    }

    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        match validate(&self.draft) {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                self.status = FormStatus::Submitting;
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = FormStatus::Success(SUCCESS_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Contact form submission failed");
                self.status = FormStatus::Error(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// Validates, sends and records the outcome; the API is only called for a valid draft.
    pub async fn submit<A>(&mut self, api: &A) -> Result<(), SubmitRejected>
    where
        A: ContactApi + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = api.submit(&submission).await;
        self.finish_submit(outcome);
        Ok(())
    }
}
