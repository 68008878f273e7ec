//! Frontend Models
//!
//! Data structures matching the ticket API.

use serde::{Deserialize, Serialize};

/// Ticket as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// ISO-8601 timestamp, kept raw; see `render::format_created_at`
    pub created_at: String,
}

/// Ticket workflow status.
///
/// Anything the server sends outside the known set lands in `Other`
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    Open,
    InProgress,
    Closed,
    Other(String),
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [TicketStatus::Open, TicketStatus::InProgress, TicketStatus::Closed];

    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Closed => "closed",
            TicketStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

impl From<String> for TicketStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "open" => TicketStatus::Open,
            "in_progress" => TicketStatus::InProgress,
            "closed" => TicketStatus::Closed,
            _ => TicketStatus::Other(raw),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Ticket priority, same fallback rules as [`TicketStatus`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Other(String),
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 3] = [TicketPriority::Low, TicketPriority::Medium, TicketPriority::High];

    pub fn as_str(&self) -> &str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Other(raw) => raw.as_str(),
        }
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Medium
    }
}

impl From<String> for TicketPriority {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "low" => TicketPriority::Low,
            "medium" => TicketPriority::Medium,
            "high" => TicketPriority::High,
            _ => TicketPriority::Other(raw),
        }
    }
}

impl From<TicketPriority> for String {
    fn from(priority: TicketPriority) -> Self {
        priority.as_str().to_string()
    }
}

/// Fields editable inline on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketField {
    Status,
    Priority,
}

impl TicketField {
    pub fn label(self) -> &'static str {
        match self {
            TicketField::Status => "Status",
            TicketField::Priority => "Priority",
        }
    }
}

/// Single-field partial update body, e.g. `{"status": "closed"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPatch {
    Status(TicketStatus),
    Priority(TicketPriority),
}

/// Create-ticket request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

/// Login / register request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Register response body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub msg: String,
}
