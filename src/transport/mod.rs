//! HTTP transport for form submissions.

mod error;
mod http;

pub use error::TransportError;
pub use http::{HttpSubmitter, ServiceResponse};
