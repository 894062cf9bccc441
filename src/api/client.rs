use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::ApiConfig;

/// Longest error body echoed back to the user when it carries no `error` field.
const MAX_ERROR_BODY: usize = 200;

/// JSON-over-HTTP client bound to one service base URL.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
            });
        }

        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::ClientInit { source })?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone().filter(|t| !t.is_empty()),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (url, builder) = self.request(Method::GET, path);
        let response = self.send(&url, builder).await?;
        decode(&url, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (url, builder) = self.request(Method::POST, path);
        let response = self.send(&url, builder.json(body)).await?;
        decode(&url, response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (url, builder) = self.request(Method::PUT, path);
        let response = self.send(&url, builder.json(body)).await?;
        decode(&url, response).await
    }

    /// DELETE ignores whatever acknowledgement body the service sends.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let (url, builder) = self.request(Method::DELETE, path);
        self.send(&url, builder).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> (String, RequestBuilder) {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        (url, builder)
    }

    async fn send(&self, url: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
        let started = Instant::now();
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(url = %url, error = %err, "Request failed");
            self.transport_error(url, err)
        })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
        tracing::warn!(url = %url, status = status.as_u16(), message = %message, "Server rejected request");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
                duration: self.timeout.as_secs(),
            }
        } else {
            ApiError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Pull a human-readable message out of an error body.
///
/// Prefers the service's `{"error": "..."}` envelope and falls back to the
/// raw body when it is short plain text.
fn error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        return value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(str::to_string);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_ERROR_BODY {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ApiClient::new(&config("http://localhost:8081/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn relative_base_url_is_rejected() {
        let err = ApiClient::new(&config("localhost:8081")).err().unwrap();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn error_envelope_message_is_extracted() {
        assert_eq!(
            error_message(r#"{"error": "Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert_eq!(error_message(r#"{"error": ""}"#), None);
        assert_eq!(error_message(r#"{"categories": []}"#), None);
    }

    #[test]
    fn short_plain_text_bodies_are_kept() {
        assert_eq!(error_message("  not found \n").as_deref(), Some("not found"));
        assert_eq!(error_message(""), None);
        assert_eq!(error_message(&"x".repeat(MAX_ERROR_BODY + 1)), None);
    }
}
