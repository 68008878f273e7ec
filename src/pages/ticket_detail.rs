//! Ticket Detail Page
//!
//! Shows one ticket (`ticket.html?id=<id>`) with inline status/priority
//! editing and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::LoadState;
use crate::api;
use crate::components::{DeleteConfirmButton, EditableBadge};
use crate::context::use_page_context;
use crate::models::{Ticket, TicketField, TicketPatch, TicketPriority, TicketStatus};
use crate::navigation::{current_search, go_to_page, ticket_id_param, Page, TicketIdParam};
use crate::render::{format_created_at, priority_badge, status_badge};
use crate::store::{store_fail_load, store_replace_ticket, DetailState, DetailStateStoreFields, DetailStore};

pub const MISSING_ID_MESSAGE: &str = "No ticket ID provided. Please select a ticket from the list.";

fn ticket_status(ticket: &Ticket) -> TicketStatus {
    ticket.status.clone()
}

fn ticket_priority(ticket: &Ticket) -> TicketPriority {
    ticket.priority.clone()
}

/// Fields shown outside the editable badges: id, title, description, created_at
pub fn summary_of(ticket: &Ticket) -> (u32, String, String, String) {
    (ticket.id, ticket.title.clone(), ticket.description.clone(), ticket.created_at.clone())
}

/// What to do with the `?id=` parameter before any fetch
pub fn resolve_ticket_id(search: &str) -> Result<u32, String> {
    match ticket_id_param(search) {
        TicketIdParam::Id(id) => Ok(id),
        TicketIdParam::Missing => Err(MISSING_ID_MESSAGE.to_string()),
        TicketIdParam::Invalid(raw) => Err(format!("Invalid ticket ID \"{}\". Please select a ticket from the list.", raw)),
    }
}

#[component]
pub fn TicketDetailPage() -> impl IntoView {
    let ctx = use_page_context();
    let store: DetailStore = Store::new(DetailState::pending());
    let (deleting, set_deleting) = signal(false);

    // Load once on mount
    Effect::new(move |_| {
        let Some(token) = ctx.require_token() else {
            return;
        };
        let id = match resolve_ticket_id(&current_search()) {
            Ok(id) => id,
            Err(message) => {
                log::warn!("[DETAIL] {}", message);
                store_fail_load(&store, message);
                return;
            }
        };

        spawn_local(async move {
            match LoadState::from_result(api::get_ticket(&token, id).await, "ticket") {
                LoadState::Ready(ticket) => {
                    log::info!("[DETAIL] loaded ticket {}", ticket.id);
                    store_replace_ticket(&store, ticket);
                    store.loading().set(false);
                }
                LoadState::Failed(message) => {
                    log::warn!("[DETAIL] {}", message);
                    store_fail_load(&store, message);
                }
                LoadState::SessionExpired => ctx.force_logout(),
                LoadState::Loading => {}
            }
        });
    });

    // The body only reads memos; a status or priority save leaves both
    // unchanged, so the badges and delete button stay mounted
    let summary = Memo::new(move |_| store.ticket().with(|t| t.as_ref().map(summary_of)));
    let load_phase = Memo::new(move |_| (store.load_error().get(), store.loading().get()));

    let delete_ticket = move |_: ()| {
        let Some(id) = store.ticket().with_untracked(|t| t.as_ref().map(|t| t.id)) else {
            return;
        };
        let Some(token) = ctx.require_token() else {
            return;
        };
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete_ticket(&token, id).await {
                Ok(()) => {
                    log::info!("[DETAIL] deleted ticket {}", id);
                    go_to_page(Page::TicketList);
                }
                Err(err) => {
                    if ctx.handle_unauthorized(&err) {
                        return;
                    }
                    log::warn!("[DETAIL] delete of ticket {} failed: {}", id, err);
                    set_deleting.try_set(false);
                    if err.is_not_found() {
                        ctx.error("Ticket not found or you don't have permission to delete it");
                    } else {
                        ctx.error(format!("Failed to delete ticket: {}", err));
                    }
                }
            }
        });
    };

    view! {
        <main class="page ticket-detail-page">
            <a class="back-link" href=Page::TicketList.path()>"← Back to tickets"</a>

            {move || {
                let (load_error, loading) = load_phase.get();
                if let Some(message) = load_error {
                    return view! {
                        <div class="error-state">
                            <p>{message}</p>
                            <a href=Page::TicketList.path()>"Go to ticket list"</a>
                        </div>
                    }.into_any();
                }
                if loading {
                    return view! { <div class="loading">"Loading ticket..."</div> }.into_any();
                }
                let Some((id, title, description, created_at)) = summary.get() else {
                    return view! { <div class="error-state">"Ticket not found."</div> }.into_any();
                };

                view! {
                    <article class="ticket-detail">
                        <header class="ticket-detail-header">
                            <span class="ticket-id">"#" {id}</span>
                            <h1 class="ticket-title">{title}</h1>
                        </header>

                        <dl class="ticket-fields">
                            <dt>"Status"</dt>
                            <dd>
                                <EditableBadge
                                    store=store
                                    field=TicketField::Status
                                    read=ticket_status
                                    options=TicketStatus::ALL.to_vec()
                                    badge=status_badge
                                    patch=TicketPatch::Status
                                />
                            </dd>
                            <dt>"Priority"</dt>
                            <dd>
                                <EditableBadge
                                    store=store
                                    field=TicketField::Priority
                                    read=ticket_priority
                                    options=TicketPriority::ALL.to_vec()
                                    badge=priority_badge
                                    patch=TicketPatch::Priority
                                />
                            </dd>
                            <dt>"Created"</dt>
                            <dd class="ticket-date">{format_created_at(&created_at)}</dd>
                        </dl>

                        <section class="ticket-description">
                            <h2>"Description"</h2>
                            <p>{description}</p>
                        </section>

                        <footer class="ticket-actions">
                            <DeleteConfirmButton
                                prompt="Delete this ticket?"
                                busy=deleting
                                on_confirm=delete_ticket
                            />
                        </footer>
                    </article>
                }.into_any()
            }}
        </main>
    }
}
