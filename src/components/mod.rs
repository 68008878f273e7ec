//! UI Components
//!
//! Reusable Leptos components.

mod badge;
mod choice_buttons;
mod delete_confirm_button;
mod editable_badge;
mod nav_bar;
mod ticket_card;
mod toast;

pub use badge::Badge;
pub use choice_buttons::ChoiceButtons;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editable_badge::EditableBadge;
pub use nav_bar::NavBar;
pub use ticket_card::TicketCard;
pub use toast::ToastHost;
