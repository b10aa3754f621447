//! Session-scoped account state shared across routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns a single `RwSignal<SessionState>` and provides it via
//! context. Screens read and update it instead of holding their own copy, so
//! the new-account marker survives navigation between routes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Per-session account facts.
///
/// `new_account` stands in for a backend "onboarding completed" record. It is
/// monotonic: once marked it stays set for the rest of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    new_account: bool,
}

impl SessionState {
    /// Whether this session registered a new account.
    pub fn is_new_account(&self) -> bool {
        self.new_account
    }

    /// Flag the session as belonging to a freshly registered account.
    ///
    /// Idempotent. The flag is never cleared.
    pub fn mark_new_account(&mut self) {
        self.new_account = true;
    }
}
