//! Ticket Card Component
//!
//! One entry of the ticket list.

use leptos::prelude::*;

use crate::components::Badge;
use crate::models::Ticket;
use crate::navigation::ticket_url;
use crate::render::{format_created_at, priority_badge, status_badge, truncate_description};

#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let href = ticket_url(ticket.id);
    let status = status_badge(&ticket.status);
    let priority = priority_badge(&ticket.priority);
    let created = format_created_at(&ticket.created_at);

    view! {
        <a class="ticket-card" href=href>
            <div class="ticket-card-header">
                <span class="ticket-id">"#" {ticket.id}</span>
                <h3 class="ticket-title">{ticket.title}</h3>
            </div>
            <p class="ticket-description">{truncate_description(&ticket.description)}</p>
            <div class="ticket-card-footer">
                <Badge style=status />
                <Badge style=priority />
                <span class="ticket-date">{created}</span>
            </div>
        </a>
    }
}
