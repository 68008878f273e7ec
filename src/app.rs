//! Ticket Desk Frontend App
//!
//! Picks the page for the current document and provides the page context.

use leptos::prelude::*;

use crate::components::{NavBar, ToastHost};
use crate::context::PageContext;
use crate::navigation::{current_page, Page};
use crate::pages::{LoginPage, NewTicketPage, TicketDetailPage, TicketListPage};

#[component]
pub fn App() -> impl IntoView {
    let page = current_page();
    log::info!("[APP] mounting {:?}", page);

    // Provide context to all children
    provide_context(PageContext::new());

    view! {
        <div class="app-layout">
            {page.requires_session().then(|| view! { <NavBar current=page /> })}

            {match page {
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::TicketList => view! { <TicketListPage /> }.into_any(),
                Page::TicketDetail => view! { <TicketDetailPage /> }.into_any(),
                Page::NewTicket => view! { <NewTicketPage /> }.into_any(),
            }}

            <ToastHost />
        </div>
    }
}
