//! Domain error types.

use thiserror::Error;

use crate::user::UserId;

/// Errors raised by the session engine while handling a single event.
///
/// None of these are fatal: the session involved keeps its prior state and
/// the transport reports [`EngineError::notice`] back to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The story graph has no scene with this identifier.
    #[error("scene not found: {0}")]
    SceneNotFound(String),

    /// A choice payload did not decode as `<scene_id>:<choice_key>`.
    #[error("malformed choice payload: {0:?}")]
    MalformedChoice(String),

    /// The scene exists but does not offer this choice.
    #[error("scene {scene_id} has no choice {choice_key:?}")]
    UnknownChoice {
        /// The scene the payload referenced.
        scene_id: String,
        /// The choice key that did not match.
        choice_key: String,
    },

    /// The user has no session to read.
    #[error("no session for user {0}")]
    SessionNotFound(UserId),
}

impl EngineError {
    /// Short user-visible message for this error.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::SceneNotFound(_) => "⚠️ Scene error: this scene no longer exists.",
            Self::MalformedChoice(_) => "⚠️ This button could not be read.",
            Self::UnknownChoice { .. } => "⚠️ Choice error: this option is no longer available.",
            Self::SessionNotFound(_) => "No story in progress. Send /start to begin.",
        }
    }

    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SceneNotFound(_) => "scene_not_found",
            Self::MalformedChoice(_) => "malformed_choice",
            Self::UnknownChoice { .. } => "unknown_choice",
            Self::SessionNotFound(_) => "session_not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_choice_display_names_scene_and_key() {
        let err = EngineError::UnknownChoice {
            scene_id: "intro".to_owned(),
            choice_key: "stay".to_owned(),
        };

        assert_eq!(err.to_string(), "scene intro has no choice \"stay\"");
        assert_eq!(err.code(), "unknown_choice");
    }

    #[test]
    fn test_every_error_has_a_notice() {
        let errors = [
            EngineError::SceneNotFound("gone".into()),
            EngineError::MalformedChoice("nocolon".into()),
            EngineError::UnknownChoice {
                scene_id: "a".into(),
                choice_key: "b".into(),
            },
            EngineError::SessionNotFound(UserId(1)),
        ];

        for err in errors {
            assert!(!err.notice().is_empty(), "{err} has an empty notice");
        }
    }
}
