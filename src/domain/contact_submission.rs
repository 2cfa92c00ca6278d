//! src/domain/contact_submission.rs

use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_message::ContactMessage;
use crate::domain::contact_name::ContactName;
use crate::domain::contact_subject::ContactSubject;

/// A contact form attempt whose four fields have all passed validation.
///
/// Only [`crate::domain::validation::validate`] builds one from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

impl serde::Serialize for ContactSubmission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ContactSubmission", 4)?;
        state.serialize_field("name", self.name.as_ref())?;
        state.serialize_field("email", self.email.as_ref())?;
        state.serialize_field("subject", self.subject.as_ref())?;
        state.serialize_field("message", self.message.as_ref())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    Failed { reason: String },
}

impl SubmissionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted)
    }
}
