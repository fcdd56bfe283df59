//! Persistence for the signed-in user's session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store writes JSON to `localStorage`; outside the `csr` build it
//! has no backing storage and behaves as an always-empty store. The memory
//! store backs tests and any non-browser embedding.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::state::auth::User;

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("browser storage rejected the operation: {0}")]
    Storage(String),
    #[error("session snapshot is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Read/write access to the persisted session snapshot.
pub trait SessionStore {
    fn load(&self) -> Result<Option<User>, SessionStoreError>;
    fn save(&self, user: &User) -> Result<(), SessionStoreError>;
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// `localStorage`-backed store keyed by the configured session key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionStoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SessionStoreError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error(err: wasm_bindgen::JsValue) -> SessionStoreError {
    SessionStoreError::Storage(format!("{err:?}"))
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Result<Option<User>, SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).map_err(js_error)?;
            match raw {
                Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
                None => Ok(None),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, user: &User) -> Result<(), SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            let raw = serde_json::to_string(user)?;
            local_storage()?.set_item(&self.key, &raw).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = user;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(&self.key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

/// In-process store holding the snapshot as serialized JSON.
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySessionStore {
    /// Store pre-seeded with `user`.
    #[cfg(test)]
    pub(crate) fn with_user(user: User) -> Self {
        let store = Self::default();
        *store.lock() = serde_json::to_string(&user).ok();
        store
    }

    /// Raw JSON currently held, if any.
    #[cfg(test)]
    pub(crate) fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Replace the raw JSON, bypassing serialization.
    #[cfg(test)]
    pub(crate) fn set_raw(&self, raw: Option<String>) {
        *self.lock() = raw;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>, SessionStoreError> {
        match self.lock().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, user: &User) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string(user)?;
        *self.lock() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        *self.lock() = None;
        Ok(())
    }
}
