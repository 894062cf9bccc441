//! Login and registration endpoints.
//!
//! Thin wrappers only; nothing in the client keeps a session.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{LoginRequest, LoginResponse, RegisterRequest};

const BASE_PATH: &str = "/auth";

pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client
            .post(&format!("{}/login", BASE_PATH), request)
            .await
    }

    /// `POST /auth/register`, returning the created user payload as-is.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.client
            .post(&format!("{}/register", BASE_PATH), request)
            .await
    }
}
