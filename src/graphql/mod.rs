//! Minimal GraphQL client: document building, transport, and response decoding.
pub mod document;
pub mod response;
pub mod transport;

pub use document::{Operation, Value};
pub use response::Response;
pub use transport::{GraphqlTransport, HttpTransport};
