use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn alice() -> User {
    User { id: "u1".to_owned(), name: "Alice".to_owned(), email: None }
}

#[test]
fn current_user_memo_tracks_user() {
    let auth = RwSignal::new(AuthState::default());
    let user = current_user_memo(auth);
    assert_eq!(user.get_untracked(), None);

    auth.set(AuthState { user: Some(alice()) });
    assert_eq!(user.get_untracked(), Some(alice()));

    auth.update(AuthState::sign_out);
    assert_eq!(user.get_untracked(), None);
}

#[test]
fn rewriting_same_user_does_not_notify_dependents() {
    let auth = RwSignal::new(AuthState { user: Some(alice()) });
    let user = current_user_memo(auth);
    let runs = Arc::new(AtomicUsize::new(0));
    let dependent = Memo::new({
        let runs = Arc::clone(&runs);
        move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            user.get().map(|u| u.id)
        }
    });

    assert_eq!(dependent.get_untracked(), Some("u1".to_owned()));
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    auth.set(AuthState { user: Some(alice()) });
    assert_eq!(dependent.get_untracked(), Some("u1".to_owned()));
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    auth.update(AuthState::sign_out);
    assert_eq!(dependent.get_untracked(), None);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}
