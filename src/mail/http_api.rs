//! src/mail/http_api.rs

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::config::HttpApiSettings;
use crate::mail::message::OutboundEmail;
use crate::mail::transport::{MailTransport, TransportError};

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

/// Delivers through a Postmark-style JSON mail API.
///
/// The API only accepts verified senders, so the submitter's name is kept as the
/// display name but the address is replaced with `sender_email`. Replies still
/// go to the submitter via `ReplyTo`.
pub struct HttpMailClient {
    http_client: Client,
    base_url: String,
    sender_email: String,
    authorization_token: Secret<String>,
}

impl HttpMailClient {
    pub fn new(settings: &HttpApiSettings) -> Result<Self, TransportError> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            http_client,
            base_url: settings.base_url.clone(),
            sender_email: settings.sender_email.clone(),
            authorization_token: settings.authorization_token.clone(),
        })
    }
}

#[async_trait::async_trait]
impl MailTransport for HttpMailClient {
    #[tracing::instrument(name = "Sending email through the mail API", skip(self, email))]
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError> {
        let url = format!("{}/email", self.base_url);
        let sender = lettre::message::Mailbox::new(
            email.from.name.clone(),
            self.sender_email.trim().parse()?,
        )
        .to_string();
        let to = email.to.to_string();
        let reply_to = email.reply_to.to_string();

        let request_body = SendEmailRequest {
            from: &sender,
            to: &to,
            reply_to: &reply_to,
            subject: &email.subject,
            html_body: &email.html_body,
            text_body: &email.text_body,
        };

        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
