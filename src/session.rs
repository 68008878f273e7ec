//! Session Store
//!
//! The bearer token persisted in browser localStorage.

use thiserror::Error;

use crate::config::TOKEN_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write to local storage")]
    WriteFailed,
}

/// Key/value backend holding the token
pub trait TokenStore {
    fn get_token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<(), StorageError>;
    fn clear_token(&self);
}

/// `window.localStorage` backed store
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokens {
    fn get_token(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(TOKEN_STORAGE_KEY, token)
            .map_err(|_| StorageError::WriteFailed)
    }

    fn clear_token(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

/// Session lifecycle on top of a [`TokenStore`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Session<S = LocalStorageTokens> {
    store: S,
}

impl Session<LocalStorageTokens> {
    pub fn browser() -> Self {
        Self::with_store(LocalStorageTokens)
    }
}

impl<S: TokenStore> Session<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get_token()
    }

    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    /// Start a session from a login response
    pub fn start(&self, token: &str) -> Result<(), StorageError> {
        self.store.set_token(token)?;
        log::info!("[SESSION] started");
        Ok(())
    }

    /// Drop the session (logout or 401)
    pub fn end(&self) {
        self.store.clear_token();
        log::info!("[SESSION] ended");
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{StorageError, TokenStore};

    /// In-memory token store for tests
    #[derive(Clone, Default)]
    pub struct MemoryTokens(pub Rc<RefCell<Option<String>>>);

    impl TokenStore for MemoryTokens {
        fn get_token(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set_token(&self, token: &str) -> Result<(), StorageError> {
            *self.0.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear_token(&self) {
            *self.0.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryTokens;
    use super::*;

    #[test]
    fn start_and_end_session() {
        let session = Session::with_store(MemoryTokens::default());
        assert!(!session.is_active());

        session.start("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.end();
        assert!(!session.is_active());
    }

    #[test]
    fn sessions_share_the_underlying_store() {
        let store = MemoryTokens::default();
        let login_page = Session::with_store(store.clone());
        let list_page = Session::with_store(store);

        login_page.start("abc").unwrap();
        assert!(list_page.is_active());
    }
}
