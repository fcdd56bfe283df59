//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once per render by the route resolver and forwarded to the session
//! hook. Signing in happens outside this client; the state is seeded from
//! the persisted session snapshot at startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::session_store::SessionStore;

/// Identity of the signed-in student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// Seed auth state from a persisted session snapshot.
    ///
    /// A store failure is logged and treated as "no user".
    pub fn restore<S: SessionStore>(store: &S) -> Self {
        match store.load() {
            Ok(user) => Self { user },
            Err(e) => {
                log::warn!("session restore failed: {e}");
                Self::default()
            }
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Drop the current user; the session hook clears persistence on the next render.
    pub fn sign_out(&mut self) {
        self.user = None;
    }
}
