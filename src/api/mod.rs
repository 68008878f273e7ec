//! REST API Client
//!
//! Thin fetch wrapper around the ticket API, organized by domain.
//! `ApiRequest::send` only fails for transport problems; status handling
//! happens in `RawResponse::into_result`.

mod error;
mod auth;
mod tickets;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config;

// Re-export all public items
pub use error::*;
pub use auth::*;
pub use tickets::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A planned request, relative to `config::API_BASE`
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
    token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Attach a bearer credential
    pub fn bearer(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(token) = &self.token {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    pub async fn send(self) -> Result<RawResponse, ApiError> {
        let url = config::api_url(&self.path);
        let mut builder = match self.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        for (name, value) in self.headers() {
            builder = builder.header(name, &value);
        }

        let request = match self.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::warn!("[API] {} {} failed: {}", self.method.as_str(), self.path, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        // Unreadable body is treated like an empty one
        let raw = response.text().await.unwrap_or_default();
        log::debug!("[API] {} {} -> {}", self.method.as_str(), self.path, status);
        Ok(RawResponse::new(status, &raw))
    }
}

/// Status code plus parsed body; `{}` when the body is empty or not JSON
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub json: Value,
}

impl RawResponse {
    pub fn new(status: u16, raw_body: &str) -> Self {
        let json = serde_json::from_str(raw_body).unwrap_or_else(|_| Value::Object(Default::default()));
        Self { status, json }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Status check only, for endpoints without a response body
    pub fn check(&self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_status(self.status, &self.json))
        }
    }

    /// Status check, then decode the body
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.check()?;
        serde_json::from_value(self.json).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ticket;
    use serde_json::json;

    #[test]
    fn authenticated_json_request_has_both_headers() {
        let request = ApiRequest::put("/api/tickets/3")
            .json(&json!({ "status": "closed" }))
            .unwrap()
            .bearer("abc");
        assert_eq!(
            request.headers(),
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer abc".to_string()),
            ]
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"closed"}"#));
    }

    #[test]
    fn plain_get_has_no_headers() {
        assert!(ApiRequest::get("/api/tickets/").headers().is_empty());
    }

    #[test]
    fn undecodable_body_becomes_empty_object() {
        let response = RawResponse::new(500, "<html>Internal Server Error</html>");
        assert_eq!(response.json, json!({}));
        assert_eq!(RawResponse::new(204, "").json, json!({}));
    }

    #[test]
    fn empty_list_is_success_not_error() {
        let tickets: Vec<Ticket> = RawResponse::new(200, "[]").into_result().unwrap();
        assert!(tickets.is_empty());
    }

    #[test]
    fn no_content_passes_status_check() {
        assert!(RawResponse::new(204, "").check().is_ok());
    }

    #[test]
    fn wrong_shape_is_decode_error() {
        let result: Result<Ticket, _> = RawResponse::new(200, r#"{"id": 1}"#).into_result();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn status_mapping_runs_before_decoding() {
        let result: Result<Ticket, _> = RawResponse::new(401, r#"{"detail":"Could not validate credentials"}"#).into_result();
        assert!(result.unwrap_err().is_unauthorized());
    }
}
