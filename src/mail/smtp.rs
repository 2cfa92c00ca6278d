use lettre::message::header::ContentType;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::SmtpSettings;
use crate::mail::message::OutboundEmail;
use crate::mail::transport::{MailTransport, TransportError};

/// Delivers through an SMTP relay such as Gmail.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, TransportError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::from_url(&settings.url)?;

        if settings.has_credentials() {
            builder = builder.credentials(Credentials::new(
                settings.username.clone(),
                settings.password.expose_secret().clone(),
            ));
        } else {
            tracing::warn!(
                smtp_url = %settings.url,
                "SMTP credentials are not configured, messages will be sent unauthenticated"
            );
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

pub(crate) fn build_message(email: &OutboundEmail) -> Result<Message, TransportError> {
    let message = Message::builder()
        .from(email.from.clone())
        .reply_to(email.reply_to.clone())
        .to(email.to.clone())
        .subject(email.subject.clone())
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )?;
    Ok(message)
}

#[async_trait::async_trait]
impl MailTransport for SmtpMailer {
    #[tracing::instrument(name = "Sending email over SMTP", skip(self, email))]
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError> {
        let message = build_message(email)?;
        // lettre already turns a non-positive reply into an error.
        self.transport.send(message).await?;
        Ok(())
    }
}
