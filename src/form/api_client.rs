use std::fmt::Formatter;

use reqwest::Client;

use crate::domain::contact_submission::ContactSubmission;
use crate::utils::error_helpers::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error("Failed to reach the contact endpoint")]
    Network(#[source] reqwest::Error),

    #[error("The contact endpoint answered {status}")]
    Rejected { status: u16, error: Option<String> },
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[async_trait::async_trait]
pub trait ContactApi: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ApiError>;
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ContactApiClient {
    http_client: Client,
    base_url: String,
}

impl ContactApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http_client = Client::builder().build().map_err(ApiError::Network)?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl ContactApi for ContactApiClient {
    #[tracing::instrument(name = "Posting contact form", skip(self, submission))]
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
        let response = self
            .http_client
            .post(&format!("{}/api/contact", self.base_url))
            .json(submission)
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error = response.json::<ErrorBody>().await.ok().map(|b| b.error);
        Err(ApiError::Rejected {
            status: status.as_u16(),
            error,
        })
    }
}
