//! Badge Component

use leptos::prelude::*;

use crate::render::BadgeStyle;

/// Read-only status/priority badge
#[component]
pub fn Badge(style: BadgeStyle) -> impl IntoView {
    view! {
        <span class=format!("badge {}", style.class)>{style.label}</span>
    }
}
