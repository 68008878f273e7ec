//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, asks for confirmation with
/// "Yes, delete" / "Cancel". While `busy` is true both buttons are disabled.
///
/// # Arguments
/// * `prompt` - Question shown in confirm mode
/// * `busy` - Request in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    prop:disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { "Deleting..." } else { "Yes, delete" }}
                </button>
                <button
                    class="cancel-btn"
                    prop:disabled=move || busy.get()
                    on:click=move |_| set_confirming.set(false)
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
