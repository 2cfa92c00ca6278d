//! Client side of the contact form: local form state and the HTTP call to `/api/contact`.

pub mod api_client;
pub mod controller;

pub use api_client::{ApiError, ContactApi, ContactApiClient};
pub use controller::{ContactFormController, FormStatus, SubmitRejected};
