//! # Session State
//!
//! Who is using the storefront right now.

use std::sync::{PoisonError, RwLock};

use meow_core::{Identity, Session};
use tracing::info;

/// The current session, guest until someone signs in.
#[derive(Debug, Default)]
pub struct SessionState {
    session: RwLock<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// A copy of the current session, to hand to commands.
    pub fn current(&self) -> Session {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Starts a new signed-in session for `identity`.
    pub fn sign_in(&self, identity: Identity) -> Session {
        let session = Session::signed_in(identity);
        info!(session = %session.id, role = ?session.role(), "Signed in");
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session.clone();
        session
    }

    /// Drops back to a fresh guest session.
    pub fn sign_out(&self) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        info!(session = %session.id, "Signed out");
        *session = Session::guest();
    }
}
