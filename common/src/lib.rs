mod envelope;
mod error;
mod invoke;
mod request;
mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use envelope::{deserialize_null_default, Enveloped, ResponseEnvelope};
pub use error::ApiError;
pub use invoke::invoke;
pub use request::{HeaderPolicy, RequestDescriptor, FORM_CONTENT_TYPE};
pub use transport::Transport;
