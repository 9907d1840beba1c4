//! Session store abstraction.

use questline_core::user::UserId;

use super::session::Session;

/// Keyed storage for sessions, injected into the handlers.
///
/// Each call is atomic on its own. A load followed by a save for the same
/// user is not; handlers assume one user's events arrive one at a time.
pub trait SessionStore: Send + Sync {
    /// Returns a copy of the user's session, if any.
    fn load(&self, user_id: UserId) -> Option<Session>;

    /// Inserts or replaces the session keyed by `session.user_id`.
    fn save(&self, session: Session);

    /// Number of stored sessions.
    fn len(&self) -> usize;

    /// Whether no sessions are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
