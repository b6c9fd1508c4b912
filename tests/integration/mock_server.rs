//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use recipe_finder::RecipeClient;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const ENDPOINT: &str = "/get_recipes";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT)
    }

    /// Create a client pointed at the mock endpoint
    pub fn create_test_client(&self) -> recipe_finder::Result<RecipeClient> {
        RecipeClient::builder()
            .api_url(self.endpoint_url())
            .timeout(Duration::from_secs(5))
            .build()
    }

    /// Create a mock for a JSON response with any status
    pub async fn mock_json_response(&self, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", ENDPOINT)
            .match_header("content-type", "application/json")
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that only answers when the request body equals `expected`
    pub async fn mock_expecting_body(&self, expected: serde_json::Value, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", ENDPOINT)
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that must never be hit
    pub async fn mock_unreachable(&self) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", ENDPOINT)
            .expect(0)
            .create_async()
            .await
    }
}

/// Accept connections and never answer, so clients run into their timeout.
pub async fn silent_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}{}", addr, ENDPOINT)
}

/// An address nothing is listening on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}{}", addr, ENDPOINT)
}
