//! Choice Buttons Component
//!
//! Button group for picking one enum value (status, priority) in forms.

use leptos::prelude::*;

use crate::render::BadgeStyle;

/// One button per option; the current value is highlighted
#[component]
pub fn ChoiceButtons<T>(
    options: Vec<T>,
    current: ReadSignal<T>,
    badge: fn(&T) -> BadgeStyle,
    #[prop(into)] on_change: Callback<T>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="choice-buttons">
            {options.into_iter().map(|value| {
                let style = badge(&value);
                let value_for_check = value.clone();
                let is_selected = move || current.with(|c| *c == value_for_check);
                let class = style.class;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { format!("choice-btn {} active", class) } else { format!("choice-btn {}", class) }
                        on:click=move |_| on_change.run(value.clone())
                    >
                        {style.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
