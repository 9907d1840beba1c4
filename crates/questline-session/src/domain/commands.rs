//! Commands for the session engine.

use questline_core::command::Command;
use questline_core::user::UserId;
use uuid::Uuid;

/// Command to start (or restart) a story for a user.
#[derive(Debug, Clone)]
pub struct BeginStory {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user starting the story.
    pub user_id: UserId,
}

impl Command for BeginStory {
    fn command_type(&self) -> &'static str {
        "session.begin_story"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Command carrying a pressed choice button.
#[derive(Debug, Clone)]
pub struct SelectChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user who pressed the button.
    pub user_id: UserId,
    /// Raw button payload, expected as `<scene_id>:<choice_key>`.
    pub payload: String,
}

impl Command for SelectChoice {
    fn command_type(&self) -> &'static str {
        "session.select_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn user_id(&self) -> UserId {
        self.user_id
    }
}
