//! API Errors
//!
//! Uniform status-code mapping shared by every endpoint.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401: token missing, invalid or expired (or bad credentials on login)
    #[error("{0}")]
    Unauthorized(String),
    /// 404: absent, or not owned by the caller
    #[error("{0}")]
    NotFound(String),
    /// Any other non-2xx
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Fetch itself failed (DNS, refused connection, CORS)
    #[error("Network error: {0}")]
    Transport(String),
    /// 2xx with a body we could not read, or a body we could not write
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Map a non-2xx status and its JSON body
    pub fn from_status(status: u16, body: &Value) -> ApiError {
        let detail = detail_message(body);
        match status {
            401 => ApiError::Unauthorized(detail.unwrap_or_else(|| "Could not validate credentials".to_string())),
            404 => ApiError::NotFound(detail.unwrap_or_else(|| "Not found".to_string())),
            _ => ApiError::Status {
                status,
                message: detail.unwrap_or_else(|| format!("Request failed with status {}", status)),
            },
        }
    }
}

/// Pull the server's `detail` field.
///
/// Plain errors carry a string; request validation errors carry a list of
/// `{ "msg": ... }` objects, which are joined.
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_401_to_unauthorized_with_detail() {
        let err = ApiError::from_status(401, &json!({ "detail": "Invalid credentials" }));
        assert_eq!(err, ApiError::Unauthorized("Invalid credentials".to_string()));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn maps_404_to_not_found() {
        let err = ApiError::from_status(404, &json!({ "detail": "Ticket not found or not owned by user" }));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Ticket not found or not owned by user");
    }

    #[test]
    fn other_status_uses_detail_or_generic_text() {
        let err = ApiError::from_status(400, &json!({ "detail": "Username already exists" }));
        assert_eq!(err.to_string(), "Username already exists");

        let err = ApiError::from_status(500, &json!({}));
        assert_eq!(
            err,
            ApiError::Status { status: 500, message: "Request failed with status 500".to_string() }
        );
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = json!({ "detail": [
            { "loc": ["body", "title"], "msg": "field required" },
            { "loc": ["body", "status"], "msg": "value is not a valid enumeration member" }
        ]});
        assert_eq!(
            detail_message(&body).as_deref(),
            Some("field required; value is not a valid enumeration member")
        );
    }

    #[test]
    fn non_string_detail_is_ignored() {
        assert_eq!(detail_message(&json!({ "detail": 3 })), None);
        assert_eq!(detail_message(&json!([])), None);
    }
}
