//! The validated story graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::payload::{ChoicePayload, MAX_PAYLOAD_BYTES, SEPARATOR};
use super::scene::Scene;
use crate::error::StoryError;

/// Immutable scene lookup table with a designated start scene.
///
/// Construction validates the whole graph: the start scene exists, every
/// choice leads to a defined scene, and every button payload fits the
/// platform limit. Lookups of identifiers taken from the graph itself
/// therefore never miss.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    start: String,
    scenes: BTreeMap<String, Scene>,
    version_hash: String,
}

impl StoryGraph {
    /// Builds and validates a graph from its scenes.
    ///
    /// # Errors
    ///
    /// Returns a `StoryError` describing the first structural problem found.
    pub fn new(
        start: impl Into<String>,
        scenes: impl IntoIterator<Item = Scene>,
    ) -> Result<Self, StoryError> {
        let start = start.into();
        let mut by_id = BTreeMap::new();
        for scene in scenes {
            validate_scene(&scene)?;
            if by_id.contains_key(&scene.id) {
                return Err(StoryError::DuplicateScene(scene.id));
            }
            by_id.insert(scene.id.clone(), scene);
        }

        if !by_id.contains_key(&start) {
            return Err(StoryError::MissingStartScene(start));
        }

        for scene in by_id.values() {
            for choice in &scene.choices {
                if !by_id.contains_key(&choice.next) {
                    return Err(StoryError::DanglingChoice {
                        scene_id: scene.id.clone(),
                        choice_key: choice.key.clone(),
                        next: choice.next.clone(),
                    });
                }
            }
        }

        let version_hash = content_hash(&start, &by_id);
        let graph = Self {
            start,
            scenes: by_id,
            version_hash,
        };

        for unreachable in graph.unreachable_scenes() {
            warn!(scene_id = %unreachable, "scene is unreachable from the start scene");
        }
        debug!(
            scenes = graph.scenes.len(),
            version_hash = %graph.version_hash,
            "story graph validated"
        );

        Ok(graph)
    }

    /// Looks up a scene by identifier.
    #[must_use]
    pub fn lookup(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.get(scene_id)
    }

    /// Identifier of the scene every session begins at.
    #[must_use]
    pub fn start_scene_id(&self) -> &str {
        &self.start
    }

    /// Number of scenes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the graph has no scenes. Always false for a validated graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// SHA-256 over the graph's content, in lowercase hex.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }

    /// Scenes no path from the start scene reaches, in identifier order.
    #[must_use]
    pub fn unreachable_scenes(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([self.start.as_str()]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(scene) = self.scenes.get(id) {
                queue.extend(scene.choices.iter().map(|choice| choice.next.as_str()));
            }
        }

        self.scenes
            .keys()
            .map(String::as_str)
            .filter(|id| !seen.contains(id))
            .collect()
    }
}

fn validate_scene(scene: &Scene) -> Result<(), StoryError> {
    if scene.id.is_empty() || scene.id.contains(SEPARATOR) {
        return Err(StoryError::InvalidSceneId(scene.id.clone()));
    }

    let mut keys = BTreeSet::new();
    for choice in &scene.choices {
        if choice.key.is_empty() {
            return Err(StoryError::InvalidChoiceKey {
                scene_id: scene.id.clone(),
            });
        }
        if !keys.insert(choice.key.as_str()) {
            return Err(StoryError::DuplicateChoice {
                scene_id: scene.id.clone(),
                choice_key: choice.key.clone(),
            });
        }

        let payload = ChoicePayload::new(scene.id.as_str(), choice.key.as_str());
        let len = payload.encoded_len();
        if len > MAX_PAYLOAD_BYTES {
            return Err(StoryError::PayloadTooLong {
                payload: payload.to_string(),
                len,
                limit: MAX_PAYLOAD_BYTES,
            });
        }
    }

    Ok(())
}

/// Hashes scenes in identifier order so the digest is independent of how
/// the source document was laid out.
fn content_hash(start: &str, scenes: &BTreeMap<String, Scene>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(start.as_bytes());
    hasher.update([0u8]);
    for scene in scenes.values() {
        for field in [scene.id.as_str(), scene.text.as_str()] {
            hasher.update(field.as_bytes());
            hasher.update([0u8]);
        }
        for choice in &scene.choices {
            let role = choice.role.as_deref().unwrap_or_default();
            for field in [
                choice.key.as_str(),
                choice.label.as_str(),
                role,
                choice.next.as_str(),
            ] {
                hasher.update(field.as_bytes());
                hasher.update([0u8]);
            }
        }
        hasher.update([1u8]);
    }
    format!("{:x}", hasher.finalize())
}
