//! Ticket List Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::LoadState;
use crate::api;
use crate::components::TicketCard;
use crate::context::use_page_context;
use crate::models::Ticket;
use crate::navigation::Page;

#[component]
pub fn TicketListPage() -> impl IntoView {
    let ctx = use_page_context();
    let (state, set_state) = signal(LoadState::<Vec<Ticket>>::Loading);

    // Load once on mount
    Effect::new(move |_| {
        let Some(token) = ctx.require_token() else {
            return;
        };
        spawn_local(async move {
            let loaded = LoadState::from_result(api::list_tickets(&token).await, "tickets");
            match &loaded {
                LoadState::Ready(tickets) => log::info!("[LIST] loaded {} tickets", tickets.len()),
                LoadState::Failed(message) => log::warn!("[LIST] {}", message),
                LoadState::SessionExpired => {
                    ctx.force_logout();
                    return;
                }
                LoadState::Loading => {}
            }
            set_state.set(loaded);
        });
    });

    view! {
        <main class="page ticket-list-page">
            <div class="page-header">
                <h1>"My Tickets"</h1>
                <a class="primary-btn" href=Page::NewTicket.path()>"+ New Ticket"</a>
            </div>

            {move || match state.get() {
                LoadState::Loading | LoadState::SessionExpired => view! {
                    <div class="loading">"Loading tickets..."</div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error-state">{message}</div>
                }.into_any(),
                LoadState::Ready(tickets) if tickets.is_empty() => view! {
                    <div class="empty-state">
                        <p>"No tickets yet."</p>
                        <a href=Page::NewTicket.path()>"Create your first ticket"</a>
                    </div>
                }.into_any(),
                LoadState::Ready(tickets) => {
                    let count = tickets.len();
                    view! {
                        <p class="ticket-count">{format!("{} ticket{}", count, if count == 1 { "" } else { "s" })}</p>
                        <div class="ticket-list">
                            <For
                                each=move || tickets.clone()
                                key=|ticket| ticket.id
                                children=move |ticket| view! { <TicketCard ticket=ticket /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </main>
    }
}
