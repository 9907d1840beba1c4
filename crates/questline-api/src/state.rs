//! Shared application state.

use std::sync::Arc;

use questline_core::clock::Clock;
use questline_session::domain::store::SessionStore;
use questline_story::StoryGraph;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The story being served.
    pub story: Arc<StoryGraph>,
    /// Per-user sessions.
    pub sessions: Arc<dyn SessionStore>,
    /// Clock for session timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        story: Arc<StoryGraph>,
        sessions: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            story,
            sessions,
            clock,
        }
    }
}
