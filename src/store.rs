//! Detail Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Owned by the
//! detail page and handed to its editors; nothing here is global.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Ticket, TicketField};

/// State of the ticket detail page
#[derive(Clone, Debug, Default, Store)]
pub struct DetailState {
    /// Server copy of the ticket; replaced wholesale, never merged
    pub ticket: Option<Ticket>,
    /// Field currently editing or saving (at most one)
    pub active_field: Option<TicketField>,
    /// Initial fetch in flight
    pub loading: bool,
    /// Inline error state replacing the page body
    pub load_error: Option<String>,
}

impl DetailState {
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DetailStore = Store<DetailState>;

/// Take the edit slot for `field`; false if another field holds it
pub fn claim_field(active: &mut Option<TicketField>, field: TicketField) -> bool {
    match active {
        Some(current) => *current == field,
        None => {
            *active = Some(field);
            true
        }
    }
}

/// Give the slot back, only if `field` holds it
pub fn release_field(active: &mut Option<TicketField>, field: TicketField) {
    if *active == Some(field) {
        *active = None;
    }
}

// ========================
// Store Helper Functions
// ========================

/// Replace the local ticket with the server's representation
pub fn store_replace_ticket(store: &DetailStore, ticket: Ticket) {
    store.ticket().set(Some(ticket));
}

pub fn store_claim_field(store: &DetailStore, field: TicketField) -> bool {
    store.active_field().try_update(|active| claim_field(active, field)).unwrap_or(false)
}

pub fn store_release_field(store: &DetailStore, field: TicketField) {
    store.active_field().try_update(|active| release_field(active, field));
}

pub fn store_fail_load(store: &DetailStore, message: impl Into<String>) {
    store.loading().set(false);
    store.load_error().set(Some(message.into()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_field_edits_at_a_time() {
        let mut active = None;
        assert!(claim_field(&mut active, TicketField::Status));
        assert!(!claim_field(&mut active, TicketField::Priority));
        // Re-claiming the same field is harmless
        assert!(claim_field(&mut active, TicketField::Status));
    }

    #[test]
    fn release_ignores_other_fields() {
        let mut active = Some(TicketField::Status);
        release_field(&mut active, TicketField::Priority);
        assert_eq!(active, Some(TicketField::Status));
        release_field(&mut active, TicketField::Status);
        assert_eq!(active, None);
    }
}
