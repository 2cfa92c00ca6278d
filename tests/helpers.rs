use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use wiremock::MockServer;

use portfolio_contact::config::{get_configuration, Configuration, TransportKind};
use portfolio_contact::mail::{MailTransport, OutboundEmail, TransportError};
use portfolio_contact::startup::AppServer;
use portfolio_contact::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        ))
        .expect("Failed to set up test logging");
    } else {
        init_subscriber(get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        ))
        .expect("Failed to set up test logging");
    }
});

/// Keeps every email it is given and optionally fails each send.
#[derive(Default)]
pub struct RecordingTransport {
    failure: Option<String>,
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingTransport {
    pub fn working() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.failure {
            Some(reason) => Err(TransportError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

pub struct TestApp {
    pub addr: String,
    pub port: u16,
    pub config: Configuration,
    pub transport: Arc<RecordingTransport>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.addr))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, route: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", &self.addr, route))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@x.com",
        "subject": "Hello there",
        "message": "This is a message.",
    })
}

fn test_configuration() -> Configuration {
    let mut c = get_configuration().expect("should load configuration");
    c.app.port = 0;
    c.mail.recipient = "owner@example.com".into();
    c
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(RecordingTransport::working(), |_| {}).await
}

pub async fn spawn_app_with(
    transport: RecordingTransport,
    customise: impl FnOnce(&mut Configuration),
) -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = test_configuration();
    customise(&mut configuration);

    let transport = Arc::new(transport);
    let server = AppServer::build_with_transport(configuration.clone(), transport.clone())
        .await
        .expect("should have created server");

    let port = server.port();
    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());

    TestApp {
        addr,
        port,
        config: configuration,
        transport,
        api_client: reqwest::Client::new(),
    }
}

/// Spawns the app with its real HTTP mail client pointed at `email_server`.
pub async fn spawn_app_with_mail_api(email_server: &MockServer) -> String {
    Lazy::force(&TRACING);

    let mut configuration = test_configuration();
    configuration.mail.transport = TransportKind::HttpApi;
    configuration.mail.http_api.base_url = email_server.uri();
    configuration.mail.http_api.send_timeout_ms = 500;

    let server = AppServer::build(configuration)
        .await
        .expect("should have created server");
    let addr = format!("http://{}", server.to_server_address());
    let _ = tokio::spawn(server.run_until_stopped());
    addr
}
