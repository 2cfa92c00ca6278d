use secrecy::Secret;
use serde_aux::prelude::deserialize_number_from_string;

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other,
            )),
        }
    }
}

#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Smtp,
    HttpApi,
}

#[derive(serde::Deserialize, Clone)]
pub struct SmtpSettings {
    /// `smtps://host[:port]` for implicit TLS, `smtp://host?tls=required` for STARTTLS.
    pub url: String,
    #[serde(default)]
    pub username: String,
    pub password: Secret<String>,
}

impl SmtpSettings {
    pub fn has_credentials(&self) -> bool {
        use secrecy::ExposeSecret;
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct HttpApiSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub send_timeout_ms: u64,
}

impl HttpApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.send_timeout_ms)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct MailSettings {
    /// Operator mailbox every contact message is delivered to.
    pub recipient: String,
    pub transport: TransportKind,
    /// Return the transport's own error text to the caller instead of a generic message.
    #[serde(default = "default_expose_transport_errors")]
    pub expose_transport_errors: bool,
    pub smtp: SmtpSettings,
    pub http_api: HttpApiSettings,
}

fn default_expose_transport_errors() -> bool {
    true
}

#[derive(serde::Deserialize, Clone)]
pub struct AppConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct Configuration {
    pub app: AppConfig,
    pub mail: MailSettings,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let mut settings = config::Config::default();

    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    // `config` picks whichever supported extension (yaml, json, toml...) is present.
    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    // e.g. `APP_MAIL__SMTP__PASSWORD=...` sets `mail.smtp.password`.
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}
