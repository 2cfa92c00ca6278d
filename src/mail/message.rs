//! src/mail/message.rs

use lettre::message::Mailbox;
use lettre::Address;

use crate::domain::contact_submission::ContactSubmission;
use crate::mail::transport::TransportError;

const HEADLINE: &str = "New message from the portfolio contact form";

/// A fully addressed email, ready for any [`crate::mail::MailTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: Mailbox,
    pub reply_to: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl OutboundEmail {
    /// Addresses the submission to `recipient`, from the submitter themselves.
    pub fn from_submission(
        submission: &ContactSubmission,
        recipient: &str,
    ) -> Result<Self, TransportError> {
        let submitter_address: Address = submission.email.as_ref().trim().parse()?;
        let submitter = Mailbox::new(
            Some(submission.name.as_ref().trim().to_string()),
            submitter_address,
        );
        let to = Mailbox::new(None, recipient.trim().parse()?);

        Ok(Self {
            from: submitter.clone(),
            reply_to: submitter,
            to,
            subject: submission.subject.as_ref().to_string(),
            text_body: text_body(submission),
            html_body: html_body(submission),
        })
    }
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "{}\n\n\
        Name: {}\n\
        Email: {}\n\
        Subject: {}\n\n\
        Message:\n{}\n",
        HEADLINE,
        submission.name.as_ref(),
        submission.email.as_ref(),
        submission.subject.as_ref(),
        submission.message.as_ref(),
    )
}

fn html_body(submission: &ContactSubmission) -> String {
    let escape = htmlescape::encode_minimal;
    let message = escape(submission.message.as_ref()).replace('\n', "<br />");
    format!(
        "<h1>{}</h1>\
        <p><strong>Subject:</strong> {}</p>\
        <p><strong>Name:</strong> {}</p>\
        <p><strong>Email:</strong> {}</p>\
        <p><strong>Message:</strong></p>\
        <p>{}</p>",
        HEADLINE,
        escape(submission.subject.as_ref()),
        escape(submission.name.as_ref()),
        escape(submission.email.as_ref()),
        message,
    )
}

#[cfg(test)]
mod tests {
    use claim::assert_err;

    use crate::domain::validation::{validate, ContactDraft};

    use super::OutboundEmail;

    fn submission(name: &str, message: &str) -> crate::domain::contact_submission::ContactSubmission {
        validate(&ContactDraft {
            name: name.into(),
            email: "jo@x.com".into(),
            subject: "Hello there".into(),
            message: message.into(),
        })
        .unwrap()
    }

    #[test]
    fn sender_carries_the_submitter_name_and_address() {
        let email =
            OutboundEmail::from_submission(&submission("Jo", "This is a message."), "owner@example.com")
                .unwrap();

        assert_eq!(email.from.to_string(), "Jo <jo@x.com>");
        assert_eq!(email.reply_to, email.from);
        assert_eq!(email.to.email.to_string(), "owner@example.com");
        assert_eq!(email.subject, "Hello there");
    }

    #[test]
    fn both_bodies_contain_every_field() {
        let email =
            OutboundEmail::from_submission(&submission("Jo", "This is a message."), "owner@example.com")
                .unwrap();

        for body in [&email.text_body, &email.html_body] {
            assert!(body.contains("Jo"));
            assert!(body.contains("jo@x.com"));
            assert!(body.contains("Hello there"));
            assert!(body.contains("This is a message."));
        }
    }

    #[test]
    fn html_body_escapes_user_input() {
        let email = OutboundEmail::from_submission(
            &submission("<b>Jo</b>", "<script>alert(1)</script>"),
            "owner@example.com",
        )
        .unwrap();

        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("&lt;script&gt;"));
        assert!(email.html_body.contains("&lt;b&gt;Jo&lt;/b&gt;"));
        assert!(email.text_body.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn an_invalid_recipient_is_rejected() {
        assert_err!(OutboundEmail::from_submission(
            &submission("Jo", "This is a message."),
            "not a mailbox"
        ));
    }
}
