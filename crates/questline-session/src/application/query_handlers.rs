//! Query handlers for the session engine.
//!
//! Queries read the session store and the story graph and never write.

use chrono::{DateTime, Utc};
use questline_core::error::EngineError;
use questline_core::user::UserId;
use questline_story::StoryGraph;
use serde::Serialize;

use crate::domain::render::RenderedScene;
use crate::domain::store::SessionStore;

/// Read-only view of a user's session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// Owner of the session.
    pub user_id: UserId,
    /// Scene the user is at.
    pub current_scene: String,
    /// Assigned role, if any.
    pub role: Option<String>,
    /// Carried items, sorted.
    pub inventory: Vec<String>,
    /// When the story was (re)started.
    pub started_at: DateTime<Utc>,
    /// When the session last changed.
    pub updated_at: DateTime<Utc>,
}

/// Renders the scene the user's session points at.
///
/// # Errors
///
/// Returns `EngineError::SessionNotFound` if the user has no session and
/// `EngineError::SceneNotFound` if the graph lacks the current scene.
pub fn resolve_current(
    user_id: UserId,
    graph: &StoryGraph,
    store: &dyn SessionStore,
) -> Result<RenderedScene, EngineError> {
    let session = store
        .load(user_id)
        .ok_or(EngineError::SessionNotFound(user_id))?;
    let scene = graph
        .lookup(&session.current_scene)
        .ok_or(EngineError::SceneNotFound(session.current_scene))?;
    Ok(RenderedScene::from(scene))
}

/// Retrieves a user's session.
///
/// # Errors
///
/// Returns `EngineError::SessionNotFound` if the user has no session.
pub fn get_session_by_user(
    user_id: UserId,
    store: &dyn SessionStore,
) -> Result<SessionView, EngineError> {
    let session = store
        .load(user_id)
        .ok_or(EngineError::SessionNotFound(user_id))?;
    Ok(SessionView {
        user_id,
        current_scene: session.current_scene,
        role: session.role,
        inventory: session.inventory.into_iter().collect(),
        started_at: session.started_at,
        updated_at: session.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use questline_core::error::EngineError;
    use questline_core::user::UserId;
    use questline_test_support::{FixedClock, fixed_now, intro_camp_story};

    use crate::application::query_handlers::{get_session_by_user, resolve_current};
    use crate::domain::session::Session;
    use crate::domain::store::SessionStore;
    use crate::in_memory_store::InMemorySessionStore;

    #[test]
    fn test_resolve_current_renders_session_scene() {
        // Arrange
        let graph = intro_camp_story();
        let store = InMemorySessionStore::new();
        let mut session = Session::begin(UserId(1), "intro", &FixedClock(fixed_now()));
        session.current_scene = "camp".to_owned();
        store.save(session);

        // Act
        let scene = resolve_current(UserId(1), &graph, &store).unwrap();

        // Assert
        assert_eq!(scene.scene_id, "camp");
        assert_eq!(scene.buttons.len(), 2);
    }

    #[test]
    fn test_resolve_current_is_idempotent() {
        // Arrange
        let graph = intro_camp_story();
        let store = InMemorySessionStore::new();
        store.save(Session::begin(UserId(1), "intro", &FixedClock(fixed_now())));
        let before = store.load(UserId(1)).unwrap();

        // Act
        let first = resolve_current(UserId(1), &graph, &store).unwrap();
        let second = resolve_current(UserId(1), &graph, &store).unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(store.load(UserId(1)).unwrap(), before);
    }

    #[test]
    fn test_resolve_current_tolerates_terminal_scene() {
        let graph = intro_camp_story();
        let store = InMemorySessionStore::new();
        let mut session = Session::begin(UserId(1), "intro", &FixedClock(fixed_now()));
        session.current_scene = "epilogue".to_owned();
        store.save(session);

        let scene = resolve_current(UserId(1), &graph, &store).unwrap();

        assert!(scene.buttons.is_empty());
    }

    #[test]
    fn test_resolve_current_reports_missing_scene_and_leaves_session() {
        // Arrange
        let graph = intro_camp_story();
        let store = InMemorySessionStore::new();
        let mut session = Session::begin(UserId(1), "intro", &FixedClock(fixed_now()));
        session.current_scene = "removed".to_owned();
        store.save(session.clone());

        // Act
        let result = resolve_current(UserId(1), &graph, &store);

        // Assert
        assert_eq!(result, Err(EngineError::SceneNotFound("removed".to_owned())));
        assert_eq!(store.load(UserId(1)), Some(session));
    }

    #[test]
    fn test_resolve_current_without_session_is_not_found() {
        let graph = intro_camp_story();
        let store = InMemorySessionStore::new();

        let result = resolve_current(UserId(9), &graph, &store);

        assert_eq!(result, Err(EngineError::SessionNotFound(UserId(9))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_session_by_user_returns_view() {
        // Arrange
        let store = InMemorySessionStore::new();
        let mut session = Session::begin(UserId(3), "intro", &FixedClock(fixed_now()));
        session.role = Some("medic".to_owned());
        store.save(session);

        // Act
        let view = get_session_by_user(UserId(3), &store).unwrap();

        // Assert
        assert_eq!(view.user_id, UserId(3));
        assert_eq!(view.current_scene, "intro");
        assert_eq!(view.role.as_deref(), Some("medic"));
        assert!(view.inventory.is_empty());
        assert_eq!(view.started_at, fixed_now());
    }

    #[test]
    fn test_get_session_by_user_returns_not_found() {
        let store = InMemorySessionStore::new();

        let result = get_session_by_user(UserId(3), &store);

        match result {
            Err(EngineError::SessionNotFound(id)) => assert_eq!(id, UserId(3)),
            other => panic!("expected SessionNotFound, got {other:?}"),
        }
    }
}
