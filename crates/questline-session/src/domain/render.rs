//! Render instructions handed back to the transport.

use questline_core::user::UserId;
use questline_story::{ChoicePayload, Scene};
use serde::Serialize;

/// Longest button label chat platforms display reliably, in characters.
pub const MAX_LABEL_CHARS: usize = 50;

/// Marker replacing the tail of an over-long label.
pub const ELLIPSIS: char = '…';

/// Notice shown when a button press arrives for a user without a session.
pub const SESSION_RESTARTED_NOTICE: &str = "🔄 Your session was restarted. Here is the beginning again.";

/// Shortens `label` to at most [`MAX_LABEL_CHARS`] characters.
///
/// Labels within the limit are returned unchanged; longer ones keep their
/// first `MAX_LABEL_CHARS - 1` characters followed by [`ELLIPSIS`].
#[must_use]
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        return label.to_owned();
    }
    let mut truncated: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

/// One choice button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Text on the button, already truncated.
    pub label: String,
    /// Opaque callback payload, `<scene_id>:<choice_key>`.
    pub payload: String,
}

/// A scene ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedScene {
    /// Scene identifier.
    pub scene_id: String,
    /// Scene text.
    pub text: String,
    /// Buttons in choice order; empty for a terminal scene.
    pub buttons: Vec<Button>,
}

impl From<&Scene> for RenderedScene {
    fn from(scene: &Scene) -> Self {
        let buttons = scene
            .choices
            .iter()
            .map(|choice| Button {
                label: truncate_label(&choice.label),
                payload: ChoicePayload::new(scene.id.as_str(), choice.key.as_str()).to_string(),
            })
            .collect();
        Self {
            scene_id: scene.id.clone(),
            text: scene.text.clone(),
            buttons,
        }
    }
}

/// What the transport should send to a user after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    /// Recipient.
    pub user_id: UserId,
    /// Short notice to show before the scene, if any.
    pub notice: Option<String>,
    /// Delete the message whose button was pressed before sending this one.
    pub replace_previous: bool,
    /// The scene to display.
    pub scene: RenderedScene,
}
