//! New Ticket Page
//!
//! Create form with client-side validation before any request.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::ChoiceButtons;
use crate::config::CREATE_REDIRECT_DELAY_MS;
use crate::context::use_page_context;
use crate::models::{TicketPriority, TicketStatus};
use crate::navigation::{go_to_page, Page};
use crate::render::{priority_badge, status_badge};
use crate::validation::validate_new_ticket;

/// Inline message under the form
#[derive(Clone, Debug, PartialEq, Eq)]
enum FormMessage {
    Error(String),
    Success(String),
}

pub fn create_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => "Unable to reach the server. Please try again.".to_string(),
        other => format!("Failed to create ticket: {}", other),
    }
}

#[component]
pub fn NewTicketPage() -> impl IntoView {
    let ctx = use_page_context();

    // Bounce to login straight away if there is no session
    Effect::new(move |_| {
        let _ = ctx.require_token();
    });

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TicketStatus::default());
    let (priority, set_priority) = signal(TicketPriority::default());
    let (message, set_message) = signal(None::<FormMessage>);
    let (submitting, set_submitting) = signal(false);

    let reset_form = move || {
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TicketStatus::default());
        set_priority.set(TicketPriority::default());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let new_ticket = match validate_new_ticket(
            &title.get_untracked(),
            &description.get_untracked(),
            status.get_untracked(),
            priority.get_untracked(),
        ) {
            Ok(ticket) => ticket,
            Err(err) => {
                log::debug!("[CREATE] rejected {}: {}", err.field(), err);
                set_message.set(Some(FormMessage::Error(err.to_string())));
                return;
            }
        };

        let Some(token) = ctx.require_token() else {
            return;
        };
        set_message.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::create_ticket(&token, &new_ticket).await {
                Ok(created) => {
                    log::info!("[CREATE] created ticket {}", created.id);
                    reset_form();
                    set_message.set(Some(FormMessage::Success(
                        "Ticket created successfully! Redirecting...".to_string(),
                    )));
                    TimeoutFuture::new(CREATE_REDIRECT_DELAY_MS).await;
                    go_to_page(Page::TicketList);
                }
                Err(err) => {
                    if ctx.handle_unauthorized(&err) {
                        return;
                    }
                    log::warn!("[CREATE] create failed: {}", err);
                    set_message.set(Some(FormMessage::Error(create_error_message(&err))));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <main class="page new-ticket-page">
            <h1>"New Ticket"</h1>

            <form class="ticket-form" on:submit=on_submit>
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Short summary (at least 3 characters)"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="6"
                    placeholder="What happened? (at least 10 characters)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <label>"Status"</label>
                <ChoiceButtons
                    options=TicketStatus::ALL.to_vec()
                    current=status
                    badge=status_badge
                    on_change=move |value: TicketStatus| set_status.set(value)
                />

                <label>"Priority"</label>
                <ChoiceButtons
                    options=TicketPriority::ALL.to_vec()
                    current=priority
                    badge=priority_badge
                    on_change=move |value: TicketPriority| set_priority.set(value)
                />

                {move || message.get().map(|msg| match msg {
                    FormMessage::Error(text) => view! { <div class="form-error">{text}</div> }.into_any(),
                    FormMessage::Success(text) => view! { <div class="form-success">{text}</div> }.into_any(),
                })}

                <div class="form-actions">
                    <a class="cancel-link" href=Page::TicketList.path()>"Cancel"</a>
                    <button type="submit" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating..." } else { "Create Ticket" }}
                    </button>
                </div>
            </form>
        </main>
    }
}
