//! Outbound mail: the message the dispatcher builds and the transports that deliver it.

pub mod http_api;
pub mod message;
pub mod smtp;
pub mod transport;

pub use message::OutboundEmail;
pub use transport::{MailTransport, TransportError};
