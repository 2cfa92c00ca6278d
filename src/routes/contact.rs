use std::fmt::Formatter;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::dispatch::ContactDispatcher;
use crate::domain::contact_submission::SubmissionResult;
use crate::domain::validation::{schema, validate, ContactDraft, FieldErrors};
use crate::utils::error_helpers::error_chain_fmt;

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a FieldErrors>,
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact form submission")]
    ValidationError(#[source] FieldErrors),

    #[error("{0}")]
    DispatchError(String),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DispatchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let fields = match self {
            ContactError::ValidationError(errors) => Some(errors),
            ContactError::DispatchError(_) => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &message,
            fields,
        })
    }
}

/// Bodies that are not a JSON object of strings get the same `{"error": ...}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: &message,
            fields: None,
        });
        InternalError::from_response(err, response).into()
    })
}

#[tracing::instrument(
    name = "Receiving contact form submission",
    skip(body, dispatcher),
    fields(
        submitter_email = %body.email,
        submitter_name = %body.name,
    )
)]
pub async fn contact(
    body: web::Json<ContactDraft>,
    dispatcher: web::Data<ContactDispatcher>,
) -> Result<HttpResponse, ContactError> {
    // Callers are not trusted to have run the form checks.
    let submission = validate(&body.0).map_err(ContactError::ValidationError)?;

    match dispatcher.dispatch(submission).await {
        SubmissionResult::Accepted => {
            Ok(HttpResponse::build(StatusCode::NON_AUTHORITATIVE_INFORMATION)
                .json(serde_json::json!({})))
        }
        SubmissionResult::Failed { reason } => Err(ContactError::DispatchError(reason)),
    }
}

pub async fn contact_schema() -> HttpResponse {
    HttpResponse::Ok().json(schema())
}
