//! YAML story documents.
//!
//! ```yaml
//! start: intro
//! scenes:
//!   intro:
//!     text: "You wake at the border."
//!     choices:
//!       - key: go
//!         label: "March to camp"
//!         role: soldier
//!         next: camp
//!   camp:
//!     text: "The camp is quiet."
//! ```
//!
//! Choices are a sequence so their order survives parsing; it becomes the
//! button order.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::graph::StoryGraph;
use crate::domain::scene::{Choice, Scene};
use crate::error::StoryError;

/// The story shipped with the bot.
const BUNDLED_STORY: &str = include_str!("../stories/border_war.yaml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StoryDocument {
    start: String,
    scenes: HashMap<String, SceneDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDocument {
    text: String,
    #[serde(default)]
    choices: Vec<ChoiceDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChoiceDocument {
    key: String,
    label: String,
    #[serde(default)]
    role: Option<String>,
    next: String,
}

impl From<ChoiceDocument> for Choice {
    fn from(doc: ChoiceDocument) -> Self {
        Self {
            key: doc.key,
            label: doc.label,
            role: doc.role,
            next: doc.next,
        }
    }
}

impl StoryGraph {
    /// Parses and validates a YAML story document.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Parse` for malformed YAML and the matching
    /// validation error for a structurally broken graph.
    pub fn from_yaml_str(source: &str) -> Result<Self, StoryError> {
        let document: StoryDocument = serde_yaml::from_str(source)?;
        let scenes = document.scenes.into_iter().map(|(id, scene)| Scene {
            id,
            text: scene.text,
            choices: scene.choices.into_iter().map(Choice::from).collect(),
        });
        Self::new(document.start, scenes)
    }

    /// Reads and validates a YAML story document from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` if the file cannot be read, otherwise as
    /// [`StoryGraph::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::from_yaml_str(&source)?;
        info!(path = %path.display(), scenes = graph.len(), "loaded story from file");
        Ok(graph)
    }

    /// The story compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only if the bundled document itself is broken, which its tests rule out.
    pub fn bundled() -> Result<Self, StoryError> {
        Self::from_yaml_str(BUNDLED_STORY)
    }
}
