//! Leptos Inline Edit Utilities
//!
//! Display / editing / saving cycle for a single field.
//! Blur cancellation is deferred and tagged with an edit generation, so a
//! selection change always wins over a blur that fires around the same time.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a single editable field currently is in its lifecycle
#[derive(Clone, Debug, PartialEq)]
enum EditPhase<T> {
    /// Badge shown, clickable
    Display,
    /// Selector shown, pre-populated with `original`
    Editing { original: T, generation: u64 },
    /// Request in flight
    Saving { original: T, attempted: T },
}

/// Outcome of the user picking a value in the selector
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<T> {
    /// Same value as before; back to display, nothing to send
    Unchanged,
    /// New value; the caller must persist it and then call
    /// [`InlineEdit::succeed`] or [`InlineEdit::fail`]
    Save { original: T, attempted: T },
    /// Not editing (late event after cancel); ignore
    Ignored,
}

/// Handle for a deferred blur, only honoured if nothing happened since.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlurTicket(u64);

/// Inline edit state machine
#[derive(Clone, Debug, PartialEq)]
pub struct InlineEdit<T> {
    phase: EditPhase<T>,
    generation: u64,
}

impl<T> Default for InlineEdit<T> {
    fn default() -> Self {
        Self {
            phase: EditPhase::Display,
            generation: 0,
        }
    }
}

impl<T: Clone + PartialEq> InlineEdit<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_display(&self) -> bool {
        matches!(self.phase, EditPhase::Display)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditPhase::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.phase, EditPhase::Saving { .. })
    }

    /// Display -> Editing. No-op unless a value is loaded and we are in Display.
    pub fn begin(&mut self, current: Option<T>) -> bool {
        let Some(original) = current else {
            return false;
        };
        if !self.is_display() {
            return false;
        }
        self.generation += 1;
        self.phase = EditPhase::Editing {
            original,
            generation: self.generation,
        };
        true
    }

    /// Editing -> Saving, or Editing -> Display when the value did not change.
    ///
    /// Always advances the generation, which invalidates any pending blur.
    pub fn select(&mut self, chosen: T) -> Selection<T> {
        let EditPhase::Editing { original, .. } = &self.phase else {
            return Selection::Ignored;
        };
        let original = original.clone();
        self.generation += 1;

        if chosen == original {
            self.phase = EditPhase::Display;
            return Selection::Unchanged;
        }

        self.phase = EditPhase::Saving {
            original: original.clone(),
            attempted: chosen.clone(),
        };
        Selection::Save {
            original,
            attempted: chosen,
        }
    }

    /// Explicit cancel (Escape). Editing -> Display immediately.
    pub fn cancel(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.generation += 1;
        self.phase = EditPhase::Display;
        true
    }

    /// Capture a blur; it takes effect only via [`InlineEdit::settle_blur`].
    pub fn blur_ticket(&self) -> Option<BlurTicket> {
        match &self.phase {
            EditPhase::Editing { generation, .. } => Some(BlurTicket(*generation)),
            _ => None,
        }
    }

    /// Apply a deferred blur. Returns true if the edit was cancelled.
    pub fn settle_blur(&mut self, ticket: BlurTicket) -> bool {
        match &self.phase {
            EditPhase::Editing { generation, .. } if *generation == ticket.0 => {
                self.generation += 1;
                self.phase = EditPhase::Display;
                true
            }
            _ => false,
        }
    }

    /// Saving -> Display after the server accepted the value.
    /// Returns the value that was saved.
    pub fn succeed(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.phase, EditPhase::Display) {
            EditPhase::Saving { attempted, .. } => Some(attempted),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Saving -> Display after a failed save.
    /// Returns the pre-edit value the display must fall back to.
    pub fn fail(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.phase, EditPhase::Display) {
            EditPhase::Saving { original, .. } => Some(original),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Drop any edit without a transition check (e.g. session ended).
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = EditPhase::Display;
    }

    /// Value the selector should show: the attempted value while saving,
    /// the original while editing, `current` otherwise.
    pub fn shown_value(&self, current: &T) -> T {
        match &self.phase {
            EditPhase::Display => current.clone(),
            EditPhase::Editing { original, .. } => original.clone(),
            EditPhase::Saving { attempted, .. } => attempted.clone(),
        }
    }
}

// ========================
// Leptos helpers
// ========================

/// Grace period before a blur is allowed to cancel an edit
pub const DEFAULT_BLUR_GRACE_MS: i32 = 150;

/// Create the reactive edit state for one field
pub fn create_inline_edit<T>() -> RwSignal<InlineEdit<T>>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    RwSignal::new(InlineEdit::new())
}

/// Schedule blur cancellation after `grace_ms`.
///
/// `on_cancel` runs only if the edit was still open with the same
/// generation when the timer fired.
pub fn defer_blur<T, F>(edit: RwSignal<InlineEdit<T>>, grace_ms: i32, on_cancel: F)
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: FnOnce() + 'static,
{
    let Some(ticket) = edit.with_untracked(|e| e.blur_ticket()) else {
        return;
    };

    let Some(win) = web_sys::window() else {
        return;
    };

    let mut on_cancel = Some(on_cancel);
    let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
        // Signal may be gone if the page was torn down meanwhile
        let cancelled = edit.try_update(|e| e.settle_blur(ticket)).unwrap_or(false);
        if cancelled {
            log::debug!("[INLINE-EDIT] blur cancelled edit");
            if let Some(f) = on_cancel.take() {
                f();
            }
        }
    });
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), grace_ms);
    cb.forget();
}

/// Keydown handler helper: Escape cancels the edit. Returns true if handled.
pub fn cancel_on_escape<T>(edit: RwSignal<InlineEdit<T>>, ev: &web_sys::KeyboardEvent) -> bool
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    if ev.key() != "Escape" {
        return false;
    }
    ev.prevent_default();
    edit.try_update(|e| e.cancel()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(value: &'static str) -> InlineEdit<&'static str> {
        let mut edit = InlineEdit::new();
        assert!(edit.begin(Some(value)));
        edit
    }

    #[test]
    fn begin_requires_loaded_value() {
        let mut edit: InlineEdit<&str> = InlineEdit::new();
        assert!(!edit.begin(None));
        assert!(edit.is_display());
    }

    #[test]
    fn begin_is_noop_while_saving() {
        let mut edit = editing("open");
        edit.select("closed");
        assert!(!edit.begin(Some("closed")));
        assert!(edit.is_saving());
    }

    #[test]
    fn selecting_same_value_skips_save() {
        let mut edit = editing("open");
        assert_eq!(edit.select("open"), Selection::Unchanged);
        assert!(edit.is_display());
    }

    #[test]
    fn selecting_new_value_enters_saving() {
        let mut edit = editing("open");
        assert_eq!(
            edit.select("closed"),
            Selection::Save { original: "open", attempted: "closed" }
        );
        assert_eq!(edit.shown_value(&"open"), "closed");
    }

    #[test]
    fn select_outside_editing_is_ignored() {
        let mut edit: InlineEdit<&str> = InlineEdit::new();
        assert_eq!(edit.select("closed"), Selection::Ignored);
    }

    #[test]
    fn change_wins_over_pending_blur() {
        let mut edit = editing("open");
        let ticket = edit.blur_ticket().unwrap();
        edit.select("closed");
        assert!(!edit.settle_blur(ticket));
        assert!(edit.is_saving());
    }

    #[test]
    fn blur_cancels_untouched_edit() {
        let mut edit = editing("open");
        let ticket = edit.blur_ticket().unwrap();
        assert!(edit.settle_blur(ticket));
        assert!(edit.is_display());
    }

    #[test]
    fn stale_blur_does_not_cancel_new_edit() {
        let mut edit = editing("open");
        let ticket = edit.blur_ticket().unwrap();
        edit.cancel();
        edit.begin(Some("open"));
        assert!(!edit.settle_blur(ticket));
        assert!(edit.is_editing());
    }

    #[test]
    fn failure_returns_pre_edit_value() {
        let mut edit = editing("open");
        edit.select("closed");
        assert_eq!(edit.fail(), Some("open"));
        assert!(edit.is_display());
    }

    #[test]
    fn success_returns_attempted_value() {
        let mut edit = editing("low");
        edit.select("high");
        assert_eq!(edit.succeed(), Some("high"));
        assert!(edit.is_display());
    }

    #[test]
    fn finish_outside_saving_keeps_phase() {
        let mut edit = editing("low");
        assert_eq!(edit.succeed(), None);
        assert_eq!(edit.fail(), None);
        assert!(edit.is_editing());
    }
}
