//! Page Context
//!
//! Shared per-page state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::config::TOAST_DURATION_MS;
use crate::navigation::{current_page, go_to_page, Page};
use crate::session::{Session, TokenStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Whether the timer for toast `id` may clear what is on screen
pub fn should_dismiss(current: Option<&Toast>, id: u32) -> bool {
    current.map(|t| t.id) == Some(id)
}

/// Where a page must go before doing anything, given the session
pub fn entry_redirect<S: TokenStore>(session: &Session<S>, page: Page) -> Option<Page> {
    if page.requires_session() && !session.is_active() {
        return Some(Page::Login);
    }
    None
}

/// 401 from any authenticated call: end the session and send to login
pub fn on_api_error<S: TokenStore>(session: &Session<S>, err: &ApiError) -> Option<Page> {
    if !err.is_unauthorized() {
        return None;
    }
    log::warn!("[AUTH] session rejected by server");
    session.end();
    Some(Page::Login)
}

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Toast currently on screen - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast currently on screen - write
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl PageContext {
    pub fn new() -> Self {
        let (toast, set_toast) = signal(None::<Toast>);
        Self {
            toast,
            set_toast,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Show a toast; it dismisses itself after `TOAST_DURATION_MS`
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.next_toast_id.update_value(|id| *id += 1);
        let id = self.next_toast_id.get_value();
        self.set_toast.set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));

        let set_toast = self.set_toast;
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            // A newer toast keeps its own timer
            let expired = toast.try_with_untracked(|t| should_dismiss(t.as_ref(), id)).unwrap_or(false);
            if expired {
                set_toast.try_set(None);
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    pub fn dismiss(&self) {
        self.set_toast.set(None);
    }

    /// Token for an authenticated page, or redirect to login
    pub fn require_token(&self) -> Option<String> {
        let session = Session::browser();
        if let Some(target) = entry_redirect(&session, current_page()) {
            log::info!("[AUTH] no session, redirecting to login");
            go_to_page(target);
            return None;
        }
        session.token()
    }

    /// Clear the session and leave for the login page
    pub fn force_logout(&self) {
        Session::browser().end();
        go_to_page(Page::Login);
    }

    /// Handle a 401 from any authenticated call. Returns true if handled.
    pub fn handle_unauthorized(&self, err: &ApiError) -> bool {
        match on_api_error(&Session::browser(), err) {
            Some(target) => {
                go_to_page(target);
                true
            }
            None => false,
        }
    }
}

pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::memory::MemoryTokens;

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            kind: ToastKind::Success,
            message: "Status updated successfully".to_string(),
        }
    }

    #[test]
    fn toast_timer_clears_its_own_toast() {
        assert!(should_dismiss(Some(&toast(4)), 4));
        // Already dismissed by hand
        assert!(!should_dismiss(None, 4));
    }

    #[test]
    fn older_timer_leaves_newer_toast() {
        assert!(!should_dismiss(Some(&toast(5)), 4));
    }

    #[test]
    fn unauthorized_ends_session_and_next_load_goes_to_login() {
        let session = Session::with_store(MemoryTokens::default());
        session.start("abc").unwrap();
        assert_eq!(entry_redirect(&session, current_page()), None);

        let err = ApiError::Unauthorized("Could not validate credentials".to_string());
        assert_eq!(on_api_error(&session, &err), Some(Page::Login));

        assert_eq!(session.token(), None);
        assert_eq!(entry_redirect(&session, Page::TicketDetail), Some(Page::Login));
        assert_eq!(entry_redirect(&session, Page::Login), None);
    }

    #[test]
    fn other_errors_keep_the_session() {
        let session = Session::with_store(MemoryTokens::default());
        session.start("abc").unwrap();

        let err = ApiError::NotFound("Ticket not found".to_string());
        assert_eq!(on_api_error(&session, &err), None);
        assert_eq!(session.token().as_deref(), Some("abc"));
    }
}
