//! Ticket Endpoints
//!
//! All calls need a bearer token; the caller handles `ApiError::Unauthorized`.

use super::{ApiError, ApiRequest};
use crate::models::{NewTicket, Ticket, TicketPatch};

const TICKETS_PATH: &str = "/api/tickets/";

fn ticket_path(id: u32) -> String {
    format!("/api/tickets/{}", id)
}

pub async fn list_tickets(token: &str) -> Result<Vec<Ticket>, ApiError> {
    ApiRequest::get(TICKETS_PATH).bearer(token).send().await?.into_result()
}

pub async fn get_ticket(token: &str, id: u32) -> Result<Ticket, ApiError> {
    ApiRequest::get(ticket_path(id)).bearer(token).send().await?.into_result()
}

pub async fn create_ticket(token: &str, ticket: &NewTicket) -> Result<Ticket, ApiError> {
    ApiRequest::post(TICKETS_PATH)
        .json(ticket)?
        .bearer(token)
        .send()
        .await?
        .into_result()
}

/// Partial update of a single field; returns the server's full ticket
pub async fn update_ticket(token: &str, id: u32, patch: &TicketPatch) -> Result<Ticket, ApiError> {
    ApiRequest::put(ticket_path(id))
        .json(patch)?
        .bearer(token)
        .send()
        .await?
        .into_result()
}

pub async fn delete_ticket(token: &str, id: u32) -> Result<(), ApiError> {
    ApiRequest::delete(ticket_path(id)).bearer(token).send().await?.check()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_paths() {
        assert_eq!(ticket_path(12), "/api/tickets/12");
        assert!(TICKETS_PATH.ends_with('/'));
    }
}
