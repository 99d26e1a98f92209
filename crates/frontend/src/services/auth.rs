//! Authentication API service

use crate::client::create_public_client;
use crate::session;
use reqwest::Method;
use stockroom_http::client::ClientError;
use stockroom_http::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// Authentication API service
#[derive(Clone, Default)]
pub struct AuthService;

impl AuthService {
    /// Create a new auth service
    pub fn new() -> Self {
        Self
    }

    /// Log in and persist the session on success.
    ///
    /// This is the flow that writes `token` and `username` into storage;
    /// everything else in the crate only reads or deletes them.
    pub async fn login(
        &self,
        username: String,
        password: String,
    ) -> Result<LoginResponse, ClientError> {
        let client = create_public_client()?;
        let body = LoginRequest { username, password };
        let response: LoginResponse = client
            .execute(client.request(Method::POST, "/api/login").json(&body))
            .await?;

        session::login(&response.token, &response.username);
        Ok(response)
    }

    /// Register a new account
    pub async fn register(
        &self,
        username: String,
        password: String,
    ) -> Result<MessageResponse, ClientError> {
        let client = create_public_client()?;
        let body = RegisterRequest { username, password };
        client
            .execute(client.request(Method::POST, "/api/register").json(&body))
            .await
    }
}
