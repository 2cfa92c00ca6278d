use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use anyhow::Context;

use crate::config::{Configuration, MailSettings, TransportKind};
use crate::dispatch::ContactDispatcher;
use crate::mail::http_api::HttpMailClient;
use crate::mail::smtp::SmtpMailer;
use crate::mail::{MailTransport, TransportError};
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let transport = get_mail_transport(&configuration.mail)
            .context("Failed to set up the mail transport")?;
        Self::build_with_transport(configuration, transport).await
    }

    /// Same as [`AppServer::build`], delivering through `transport` instead of the configured one.
    pub async fn build_with_transport(
        configuration: Configuration,
        transport: Arc<dyn MailTransport>,
    ) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))
        .with_context(|| {
            format!(
                "Failed to bind to {}:{}",
                configuration.app.host, configuration.app.port
            )
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            "Starting contact service on address: {}:{}",
            configuration.app.host,
            port
        );

        let dispatcher = ContactDispatcher::new(transport, &configuration.mail);
        let server = run(listener, dispatcher)?;

        Ok(Self {
            port,
            address: configuration.app.host,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_mail_transport(
    settings: &MailSettings,
) -> Result<Arc<dyn MailTransport>, TransportError> {
    let transport: Arc<dyn MailTransport> = match settings.transport {
        TransportKind::Smtp => Arc::new(SmtpMailer::new(&settings.smtp)?),
        TransportKind::HttpApi => Arc::new(HttpMailClient::new(&settings.http_api)?),
    };
    tracing::info!(transport = ?settings.transport, "Mail transport configured");
    Ok(transport)
}
