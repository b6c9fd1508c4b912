//! Integration tests with mock HTTP server

pub mod client;
pub mod mock_server;
pub mod page_flow;
