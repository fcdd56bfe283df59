//! Session hook run by the route resolver on every render.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root view hands the current user to [`SessionSync::observe`] once per
//! render. Only a change of user (identity or profile) touches the session
//! store, so renders triggered by navigation alone cost a lock and a compare.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::state::auth::User;
use crate::util::session_store::SessionStore;

/// User transition detected between two renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionChange {
    SignedIn(User),
    SignedOut,
    Switched { from: String, to: User },
    /// Same id, different profile fields.
    Updated(User),
}

/// Compare the previously observed user with the current one.
pub fn detect_change(previous: Option<&User>, current: Option<&User>) -> Option<SessionChange> {
    match (previous, current) {
        (None, None) => None,
        (None, Some(user)) => Some(SessionChange::SignedIn(user.clone())),
        (Some(_), None) => Some(SessionChange::SignedOut),
        (Some(prev), Some(user)) if prev == user => None,
        (Some(prev), Some(user)) if prev.id == user.id => Some(SessionChange::Updated(user.clone())),
        (Some(prev), Some(user)) => Some(SessionChange::Switched { from: prev.id.clone(), to: user.clone() }),
    }
}

/// Keeps the persisted session snapshot in step with the auth store.
#[derive(Clone, Debug)]
pub struct SessionSync<S> {
    last_user: Arc<Mutex<Option<User>>>,
    store: S,
}

impl<S: SessionStore> SessionSync<S> {
    /// `initial` is the user the auth store was seeded with, so restoring a
    /// session does not immediately write it back.
    pub fn new(store: S, initial: Option<&User>) -> Self {
        Self { last_user: Arc::new(Mutex::new(initial.cloned())), store }
    }

    /// React to the user value read during a render.
    pub fn observe(&self, user: Option<&User>) -> Option<SessionChange> {
        let change = {
            let mut last = self.last_user.lock().unwrap_or_else(PoisonError::into_inner);
            let change = detect_change(last.as_ref(), user)?;
            *last = user.cloned();
            change
        };

        let persisted = match &change {
            SessionChange::SignedIn(user) | SessionChange::Switched { to: user, .. } | SessionChange::Updated(user) => {
                self.store.save(user)
            }
            SessionChange::SignedOut => self.store.clear(),
        };

        match (&change, persisted) {
            (_, Err(e)) => log::warn!("session snapshot not updated: {e}"),
            (SessionChange::SignedIn(user), Ok(())) => log::info!("session started for {}", user.id),
            (SessionChange::Switched { from, to }, Ok(())) => log::info!("session switched from {from} to {}", to.id),
            (SessionChange::Updated(user), Ok(())) => log::info!("session profile refreshed for {}", user.id),
            (SessionChange::SignedOut, Ok(())) => log::info!("session ended"),
        }

        Some(change)
    }
}
