//! HTTP transport for the recommendation endpoint.

mod http;

pub use http::{HttpReply, HttpTransport, TransportError};
