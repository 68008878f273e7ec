//! Page Controllers
//!
//! One top-level component per HTML entry point.

mod login;
mod new_ticket;
mod ticket_detail;
mod ticket_list;

pub use login::LoginPage;
pub use new_ticket::NewTicketPage;
pub use ticket_detail::TicketDetailPage;
pub use ticket_list::TicketListPage;

use crate::api::ApiError;

/// Result of a page's primary fetch
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
    /// 401: the page must clear the session and leave
    SessionExpired,
}

impl<T> LoadState<T> {
    /// `what` names the resource in the generic failure message,
    /// e.g. "tickets" -> "Failed to load tickets: ...".
    pub fn from_result(result: Result<T, ApiError>, what: &str) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(ApiError::Unauthorized(_)) => LoadState::SessionExpired,
            Err(ApiError::NotFound(_)) => LoadState::Failed(format!("{} not found.", capitalize(what))),
            Err(err) => LoadState::Failed(format!("Failed to load {}: {}", what, err)),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
