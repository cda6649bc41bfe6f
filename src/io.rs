//! HTTP transport seam between the API clients and the backend

use async_trait::async_trait;

use crate::api::ApiError;

/// Raw HTTP response from the backend
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over the HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;

    /// Send a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, ApiError>;

    /// Send a PUT request with a JSON body
    async fn put_json(&self, url: &str, body: &str) -> Result<HttpResponse, ApiError>;

    /// Send a DELETE request
    async fn delete(&self, url: &str) -> Result<HttpResponse, ApiError>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, ApiError> {
        tracing::debug!("{} {}", method, url);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("{} {} failed: {}", method, url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Reading response body: {}", e)))?;

        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.send("GET", url, self.client.get(url)).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.send("POST", url, request).await
    }

    async fn put_json(&self, url: &str, body: &str) -> Result<HttpResponse, ApiError> {
        let request = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.send("PUT", url, request).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, ApiError> {
        self.send("DELETE", url, self.client.delete(url)).await
    }
}
