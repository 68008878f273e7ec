//! Editable Badge Component
//!
//! Inline editor for one enum field of the loaded ticket: badge in display
//! mode, selector while editing or saving.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_inline_edit::{cancel_on_escape, create_inline_edit, defer_blur, InlineEdit, Selection};

use crate::api::{self, ApiError};
use crate::config::BLUR_GRACE_MS;
use crate::context::use_page_context;
use crate::models::{Ticket, TicketField, TicketPatch};
use crate::render::BadgeStyle;
use crate::store::{store_claim_field, store_release_field, DetailStateStoreFields, DetailStore};

/// How a finished save request left the page
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    Failed(ApiError),
    SessionExpired,
}

/// Fold the update response into the loaded ticket.
///
/// Success replaces the whole ticket with the server copy. Any failure
/// leaves the ticket untouched so the badge falls back to the pre-edit value.
pub fn apply_save<T: Clone + PartialEq>(
    ticket: &mut Option<Ticket>,
    edit: &mut InlineEdit<T>,
    result: Result<Ticket, ApiError>,
) -> SaveOutcome {
    match result {
        Ok(updated) => {
            edit.succeed();
            *ticket = Some(updated);
            SaveOutcome::Saved
        }
        Err(err) if err.is_unauthorized() => {
            edit.reset();
            SaveOutcome::SessionExpired
        }
        Err(err) => {
            edit.fail();
            SaveOutcome::Failed(err)
        }
    }
}

pub fn save_failure_message(field: TicketField, err: &ApiError) -> String {
    if err.is_not_found() {
        return "Ticket not found or you don't have permission to edit it".to_string();
    }
    format!("Failed to update {}: {}", field.label().to_lowercase(), err)
}

/// Click-to-edit badge bound to one ticket field
#[component]
pub fn EditableBadge<T>(
    store: DetailStore,
    field: TicketField,
    /// Read the field from the ticket
    read: fn(&Ticket) -> T,
    /// Values offered in the selector
    options: Vec<T>,
    badge: fn(&T) -> BadgeStyle,
    /// Build the single-field update body
    patch: fn(T) -> TicketPatch,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + From<String> + Into<String> + 'static,
{
    let ctx = use_page_context();
    let edit = create_inline_edit::<T>();
    let options = StoredValue::new(options);
    let select_ref = NodeRef::<leptos::html::Select>::new();

    // Focus the selector as soon as it is mounted
    Effect::new(move |_| {
        if let Some(select) = select_ref.get() {
            let _ = select.focus();
        }
    });

    let on_activate = move |_| {
        if !store_claim_field(&store, field) {
            return;
        }
        let current = store.ticket().with_untracked(|t| t.as_ref().map(read));
        let started = edit.try_update(|e| e.begin(current)).unwrap_or(false);
        if !started {
            store_release_field(&store, field);
        }
    };

    let save = move |attempted: T| {
        let Some(id) = store.ticket().with_untracked(|t| t.as_ref().map(|t| t.id)) else {
            return;
        };
        let Some(token) = ctx.require_token() else {
            edit.update(|e| e.reset());
            store_release_field(&store, field);
            return;
        };
        let body = patch(attempted);
        log::info!("[DETAIL] saving {:?} on ticket {}", body, id);

        spawn_local(async move {
            let result = api::update_ticket(&token, id, &body).await;
            // Field-level writes only, so the rest of the page stays mounted
            store_release_field(&store, field);
            let outcome = store
                .ticket()
                .try_update(|ticket| edit.try_update(|e| apply_save(ticket, e, result)))
                .flatten();

            match outcome {
                Some(SaveOutcome::Saved) => {
                    ctx.success(format!("{} updated successfully", field.label()));
                }
                Some(SaveOutcome::Failed(err)) => {
                    log::warn!("[DETAIL] update of ticket {} failed: {}", id, err);
                    ctx.error(save_failure_message(field, &err));
                }
                Some(SaveOutcome::SessionExpired) => ctx.force_logout(),
                // Page went away while the request was in flight
                None => {}
            }
        });
    };

    let on_change = move |ev: leptos::ev::Event| {
        let chosen = T::from(event_target_value(&ev));
        let selection = edit.try_update(|e| e.select(chosen)).unwrap_or(Selection::Ignored);
        match selection {
            Selection::Save { attempted, .. } => save(attempted),
            Selection::Unchanged => store_release_field(&store, field),
            Selection::Ignored => {}
        }
    };

    let on_blur = move |_| {
        defer_blur(edit, BLUR_GRACE_MS, move || store_release_field(&store, field));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if cancel_on_escape(edit, &ev) {
            store_release_field(&store, field);
        }
    };

    view! {
        {move || {
            let Some(value) = store.ticket().with(|t| t.as_ref().map(read)) else {
                return view! { <span class="badge"></span> }.into_any();
            };

            if edit.with(|e| e.is_display()) {
                let style = badge(&value);
                return view! {
                    <span
                        class=format!("badge editable {}", style.class)
                        title="Click to edit"
                        on:click=on_activate
                    >
                        {style.label}
                    </span>
                }.into_any();
            }

            let shown: String = edit.with(|e| e.shown_value(&value)).into();
            let saving = edit.with(|e| e.is_saving());
            let mut choices = options.get_value();
            // Keep an unrecognised current value selectable
            if !choices.contains(&value) {
                choices.insert(0, value.clone());
            }

            view! {
                <select
                    class="inline-edit-select"
                    node_ref=select_ref
                    prop:disabled=saving
                    on:change=on_change
                    on:blur=on_blur
                    on:keydown=on_keydown
                >
                    {choices.into_iter().map(|choice| {
                        let label = badge(&choice).label;
                        let raw: String = choice.into();
                        let selected = raw == shown;
                        view! { <option value=raw selected=selected>{label}</option> }
                    }).collect_view()}
                </select>
            }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TicketStatus;

    fn ticket(status: TicketStatus, title: &str) -> Ticket {
        Ticket {
            id: 3,
            title: title.to_string(),
            description: "Office wifi drops every hour".to_string(),
            status,
            priority: crate::models::TicketPriority::Medium,
            created_at: "2025-03-05T14:07:00".to_string(),
        }
    }

    fn saving_state() -> (Option<Ticket>, InlineEdit<TicketStatus>) {
        let loaded = Some(ticket(TicketStatus::Open, "Wifi drops"));
        let mut edit = InlineEdit::new();
        edit.begin(loaded.as_ref().map(|t| t.status.clone()));
        edit.select(TicketStatus::Closed);
        (loaded, edit)
    }

    #[test]
    fn success_replaces_whole_ticket() {
        let (mut loaded, mut edit) = saving_state();
        let server = ticket(TicketStatus::Closed, "Wifi drops (resolved)");

        let outcome = apply_save(&mut loaded, &mut edit, Ok(server.clone()));

        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(loaded, Some(server));
        assert!(edit.is_display());
    }

    #[test]
    fn not_found_keeps_pre_edit_ticket() {
        let (mut loaded, mut edit) = saving_state();
        let before = loaded.clone();
        let err = ApiError::NotFound("Ticket not found or not owned by user".to_string());

        let outcome = apply_save(&mut loaded, &mut edit, Err(err.clone()));

        assert_eq!(outcome, SaveOutcome::Failed(err.clone()));
        assert_eq!(loaded, before);
        assert_eq!(edit.shown_value(&TicketStatus::Open), TicketStatus::Open);
        assert_eq!(
            save_failure_message(TicketField::Status, &err),
            "Ticket not found or you don't have permission to edit it"
        );
    }

    #[test]
    fn generic_failure_message_includes_detail() {
        let (mut loaded, mut edit) = saving_state();
        let err = ApiError::Status { status: 500, message: "database is locked".to_string() };

        apply_save(&mut loaded, &mut edit, Err(err.clone()));

        assert_eq!(loaded.as_ref().map(|t| t.status.clone()), Some(TicketStatus::Open));
        assert_eq!(save_failure_message(TicketField::Status, &err), "Failed to update status: database is locked");
    }

    #[test]
    fn unauthorized_supersedes_failure() {
        let (mut loaded, mut edit) = saving_state();
        let outcome = apply_save(
            &mut loaded,
            &mut edit,
            Err(ApiError::Unauthorized("Could not validate credentials".to_string())),
        );
        assert_eq!(outcome, SaveOutcome::SessionExpired);
        assert!(edit.is_display());
    }

    #[test]
    fn closed_badge_after_successful_edit() {
        let (mut loaded, mut edit) = saving_state();
        apply_save(&mut loaded, &mut edit, Ok(ticket(TicketStatus::Closed, "Wifi drops")));

        let status = loaded.as_ref().map(|t| t.status.clone()).unwrap();
        let style = crate::render::status_badge(&status);
        assert_eq!(style.label, "Closed");
        assert_eq!(style.class, "status-closed");
    }
}
