//! Navigation Bar Component
//!
//! Top bar for authenticated pages: title, page links, logout.

use leptos::prelude::*;

use crate::context::use_page_context;
use crate::navigation::Page;

/// Navigation bar with logout
#[component]
pub fn NavBar(current: Page) -> impl IntoView {
    let ctx = use_page_context();

    let logout = move |_| {
        log::info!("[NAV] logout requested");
        ctx.force_logout();
    };

    let link_class = move |page: Page| {
        if page == current {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href=Page::TicketList.path()>"Ticket Desk"</a>
            <div class="nav-links">
                <a class=link_class(Page::TicketList) href=Page::TicketList.path()>"My Tickets"</a>
                <a class=link_class(Page::NewTicket) href=Page::NewTicket.path()>"New Ticket"</a>
            </div>
            <button class="nav-logout" on:click=logout>"Logout"</button>
        </nav>
    }
}
