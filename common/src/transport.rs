use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Anything that can send a prepared request and hand back the response.
///
/// Connection pooling and timeouts belong to the implementor. `reqwest::Client`
/// is the production transport; tests substitute a fake.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl Transport for Client {
    async fn send(&self, request: Request) -> reqwest::Result<Response> {
        self.execute(request).await
    }
}
