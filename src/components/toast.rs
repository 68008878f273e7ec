//! Toast Component
//!
//! Renders the page context's transient notification.

use leptos::prelude::*;

use crate::context::{use_page_context, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{toast.message}</span>
                    <button class="toast-close" on:click=move |_| ctx.dismiss()>"×"</button>
                </div>
            }
        })}
    }
}
