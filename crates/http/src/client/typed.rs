//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{header, Client, ClientBuilder};
use std::time::Duration;

const USER_AGENT: &str = "stockroom-client/0.1.0";

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[cfg(target_arch = "wasm32")]
    {
        // Timeouts are not supported on WASM; the browser owns the transport.
        let _ = timeout;
        Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
    }
}

async fn execute_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicStockClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints behind the bearer-token check
#[derive(Clone)]
pub struct AuthenticatedStockClient {
    client: Client,
    base_url: String,
    token: String,
}

impl PublicStockClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        TypedClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request, decoding a JSON body on success
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Send a request and hand back the raw response, whatever its status.
    ///
    /// Same contract as [`AuthenticatedStockClient::send`]: no status
    /// interpretation, only transport-level failures become an `Err`.
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        Ok(request.send().await?)
    }

    /// Attach a bearer token, promoting this client to the authenticated type
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedStockClient {
        AuthenticatedStockClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedStockClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        TypedClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(token)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer header
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request, decoding a JSON body on success
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Send a request and hand back the raw response, whatever its status.
    ///
    /// No status interpretation happens here: 2xx, 4xx and 5xx all resolve
    /// with the response object. Only a transport-level failure (connection
    /// refused, DNS, aborted request) becomes an `Err`. Single shot, no
    /// retries.
    pub async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        Ok(request.send().await?)
    }

    /// Create a public client sharing this client's connection pool
    pub fn to_public(&self) -> PublicStockClient {
        PublicStockClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn parts(self) -> Result<(Client, String), ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();
        let client = build_http_client(self.timeout)?;
        Ok((client, base_url))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicStockClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(PublicStockClient { client, base_url })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedStockClient, ClientError> {
        let (client, base_url) = self.parts()?;
        Ok(AuthenticatedStockClient {
            client,
            base_url,
            token: token.into(),
        })
    }
}
