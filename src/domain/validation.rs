//! Field rules the contact form is checked against before anything is sent.

use std::collections::BTreeMap;

use crate::domain::contact_email::{ContactEmail, EMAIL_ERROR};
use crate::domain::contact_message::{ContactMessage, MESSAGE_ERROR, MESSAGE_MIN_LENGTH};
use crate::domain::contact_name::{ContactName, NAME_ERROR, NAME_MIN_LENGTH};
use crate::domain::contact_subject::{ContactSubject, SUBJECT_ERROR, SUBJECT_MIN_LENGTH};
use crate::domain::contact_submission::ContactSubmission;

/// The four form fields exactly as typed. Missing JSON keys become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// Only a keyed object is accepted; a positional array must not map onto the fields.
impl<'de> serde::Deserialize<'de> for ContactDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DraftVisitor;

        impl<'de> serde::de::Visitor<'de> for DraftVisitor {
            type Value = ContactDraft;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an object with string fields name, email, subject and message")
            }

            fn visit_map<A>(self, mut map: A) -> Result<ContactDraft, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut draft = ContactDraft::default();
                while let Some(key) = map.next_key::<String>()? {
                    let slot = match key.as_str() {
                        "name" => &mut draft.name,
                        "email" => &mut draft.email,
                        "subject" => &mut draft.subject,
                        "message" => &mut draft.message,
                        _ => {
                            map.next_value::<serde::de::IgnoredAny>()?;
                            continue;
                        }
                    };
                    *slot = map.next_value()?;
                }
                Ok(draft)
            }
        }

        deserializer.deserialize_map(DraftVisitor)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per violated field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<ContactField, String>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record<T>(&mut self, field: ContactField, outcome: Result<T, String>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.insert(field, message);
                None
            }
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Checks every field independently and reports all failures together.
pub fn validate(draft: &ContactDraft) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = errors.record(ContactField::Name, ContactName::parse(draft.name.clone()));
    let email = errors.record(ContactField::Email, ContactEmail::parse(draft.email.clone()));
    let subject = errors.record(
        ContactField::Subject,
        ContactSubject::parse(draft.subject.clone()),
    );
    let message = errors.record(
        ContactField::Message,
        ContactMessage::parse(draft.message.clone()),
    );

    match (name, email, subject, message) {
        (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            subject,
            message,
        }),
        _ => Err(errors),
    }
}

impl TryFrom<ContactDraft> for ContactSubmission {
    type Error = FieldErrors;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        validate(&draft)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    MinLength { min: usize },
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FieldConstraint {
    pub field: ContactField,
    pub constraint: Constraint,
    pub message: &'static str,
}

static SCHEMA: [FieldConstraint; 4] = [
    FieldConstraint {
        field: ContactField::Name,
        constraint: Constraint::MinLength {
            min: NAME_MIN_LENGTH,
        },
        message: NAME_ERROR,
    },
    FieldConstraint {
        field: ContactField::Email,
        constraint: Constraint::Email,
        message: EMAIL_ERROR,
    },
    FieldConstraint {
        field: ContactField::Subject,
        constraint: Constraint::MinLength {
            min: SUBJECT_MIN_LENGTH,
        },
        message: SUBJECT_ERROR,
    },
    FieldConstraint {
        field: ContactField::Message,
        constraint: Constraint::MinLength {
            min: MESSAGE_MIN_LENGTH,
        },
        message: MESSAGE_ERROR,
    },
];

/// Field constraints in form order, for renderers that show inline hints.
pub fn schema() -> &'static [FieldConstraint] {
    &SCHEMA
}
