//! Button callback payloads.
//!
//! Every choice button carries an opaque payload of the form
//! `<scene_id>:<choice_key>`. Existing buttons in chat histories depend on
//! this exact format.

use std::fmt;

use questline_core::error::EngineError;

/// Separator between the scene identifier and the choice key.
pub const SEPARATOR: char = ':';

/// Upper bound on an encoded payload, in bytes, imposed by chat platforms.
pub const MAX_PAYLOAD_BYTES: usize = 64;

/// A decoded `<scene_id>:<choice_key>` button payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoicePayload {
    /// Scene the button was rendered for.
    pub scene_id: String,
    /// Choice key within that scene.
    pub choice_key: String,
}

impl ChoicePayload {
    /// Creates a payload for a choice in a scene.
    #[must_use]
    pub fn new(scene_id: impl Into<String>, choice_key: impl Into<String>) -> Self {
        Self {
            scene_id: scene_id.into(),
            choice_key: choice_key.into(),
        }
    }

    /// Decodes a raw payload, splitting on the first separator.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MalformedChoice` if `raw` has no separator.
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        raw.split_once(SEPARATOR)
            .map(|(scene_id, choice_key)| Self::new(scene_id, choice_key))
            .ok_or_else(|| EngineError::MalformedChoice(raw.to_owned()))
    }

    /// Length in bytes of the encoded form.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.scene_id.len() + SEPARATOR.len_utf8() + self.choice_key.len()
    }
}

impl fmt::Display for ChoicePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.scene_id, self.choice_key)
    }
}
