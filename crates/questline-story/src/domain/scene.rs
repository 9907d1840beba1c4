//! Scenes and the choices that connect them.

use serde::Serialize;

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Key identifying this choice within its scene.
    pub key: String,
    /// Button label shown to the player.
    pub label: String,
    /// Role assigned to the player when this choice is taken.
    pub role: Option<String>,
    /// Identifier of the scene this choice leads to.
    pub next: String,
}

impl Choice {
    /// Creates a choice without a role side effect.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            role: None,
            next: next.into(),
        }
    }

    /// Sets the role this choice assigns.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// A node in the story graph: display text plus ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// Scene identifier.
    pub id: String,
    /// Text shown to the player.
    pub text: String,
    /// Choices in button display order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Creates a scene with no choices.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Appends a choice, keeping insertion order.
    #[must_use]
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Looks up a choice by key.
    #[must_use]
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.key == key)
    }

    /// A scene without choices ends the story.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }
}
