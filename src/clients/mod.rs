use std::fmt;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::envelope::ErrorEnvelope;

pub mod auth;
pub mod bookings;
pub mod profiles;
pub mod venues;

pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure: connect, TLS, timeout.
    Http(reqwest::Error),
    /// Non-2xx response; `message` is the API's own first error message
    /// when the body carried one.
    Status { status: StatusCode, message: String },
    /// 2xx response whose body did not match the expected shape.
    Decode { message: String, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(err) => write!(f, "Request failed: {}", err),
            ApiError::Status { status, message } => write!(f, "{} ({})", message, status),
            ApiError::Decode { message, body } => {
                write!(f, "Failed to parse response: {}\nRaw body: {}", message, body)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl ApiError {
    fn from_error_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.first_message().map(|m| m.to_string()))
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Status { status, message }
    }
}

/// Shared HTTP client for the marketplace API. Holds the base URL and the
/// per-application API key; bearer tokens are supplied per call since only
/// some endpoints need them.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
    }

    pub(crate) fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path)
            .header("Authorization", format!("Bearer {}", token))
    }
}

/// Sends the request, reads the body once, and either decodes it or turns
/// it into an ApiError.
pub(crate) async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ApiError::from_error_body(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode {
        message: e.to_string(),
        body: text,
    })
}

/// For endpoints that answer 204 with no body.
pub(crate) async fn execute_no_content(builder: RequestBuilder) -> Result<(), ApiError> {
    let response = builder.send().await?;
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_error_body(status, &text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_extracted() {
        let body = r#"{"errors":[{"message":"The selected dates overlap an existing booking"}],"status":"Conflict"}"#;
        let err = ApiError::from_error_body(StatusCode::CONFLICT, body);
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "The selected dates overlap an existing booking");
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        let err = ApiError::from_error_body(StatusCode::BAD_GATEWAY, "<html>boom</html>");
        match err {
            ApiError::Status { message, .. } => {
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ApiClient::new("http://localhost:3000/", "key");
        assert_eq!(api.base_url(), "http://localhost:3000");
    }
}
