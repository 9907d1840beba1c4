//! Per-user session state.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use questline_core::clock::Clock;
use questline_core::user::UserId;
use questline_story::Choice;

/// Where a user is in the story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Owner of this session.
    pub user_id: UserId,
    /// Scene the user is currently looking at.
    pub current_scene: String,
    /// Role assigned by the most recent choice that declared one.
    pub role: Option<String>,
    /// Items carried. No choice adds to it yet.
    pub inventory: BTreeSet<String>,
    /// When the story was (re)started.
    pub started_at: DateTime<Utc>,
    /// When the session last changed.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// A fresh session at `start_scene` with no role and an empty inventory.
    #[must_use]
    pub fn begin(user_id: UserId, start_scene: &str, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            user_id,
            current_scene: start_scene.to_owned(),
            role: None,
            inventory: BTreeSet::new(),
            started_at: now,
            updated_at: now,
        }
    }

    /// Applies a choice's side effects and moves to its target scene.
    ///
    /// The role is overwritten only when the choice declares one.
    pub fn take_choice(&mut self, choice: &Choice, clock: &dyn Clock) {
        if let Some(role) = &choice.role {
            self.role = Some(role.clone());
        }
        self.current_scene.clone_from(&choice.next);
        self.updated_at = clock.now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use questline_test_support::{FixedClock, fixed_now};

    #[test]
    fn test_begin_starts_at_start_scene_without_role() {
        // Arrange
        let clock = FixedClock(fixed_now());

        // Act
        let session = Session::begin(UserId(7), "intro", &clock);

        // Assert
        assert_eq!(session.current_scene, "intro");
        assert_eq!(session.role, None);
        assert!(session.inventory.is_empty());
        assert_eq!(session.started_at, fixed_now());
        assert_eq!(session.updated_at, fixed_now());
    }

    #[test]
    fn test_take_choice_keeps_role_when_choice_declares_none() {
        // Arrange
        let mut session = Session::begin(UserId(7), "intro", &FixedClock(fixed_now()));
        session.role = Some("scout".to_owned());
        let later = FixedClock(fixed_now() + Duration::minutes(5));

        // Act
        session.take_choice(&Choice::new("on", "Onward", "camp"), &later);

        // Assert
        assert_eq!(session.current_scene, "camp");
        assert_eq!(session.role.as_deref(), Some("scout"));
        assert_eq!(session.started_at, fixed_now());
        assert_eq!(session.updated_at, later.0);
    }

    #[test]
    fn test_take_choice_overwrites_role_last_write_wins() {
        let clock = FixedClock(fixed_now());
        let mut session = Session::begin(UserId(7), "intro", &clock);

        session.take_choice(&Choice::new("a", "A", "camp").with_role("soldier"), &clock);
        session.take_choice(&Choice::new("b", "B", "forest").with_role("scout"), &clock);

        assert_eq!(session.current_scene, "forest");
        assert_eq!(session.role.as_deref(), Some("scout"));
    }
}
