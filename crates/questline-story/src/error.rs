//! Story loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// A story document that cannot be served.
///
/// Raised once at startup; a graph that loads successfully never produces
/// these at navigation time.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("failed to read story file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid story YAML.
    #[error("failed to parse story document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The designated start scene is not defined.
    #[error("start scene {0:?} is not defined")]
    MissingStartScene(String),

    /// A scene identifier is empty or contains the payload separator.
    #[error("invalid scene id {0:?}: must be non-empty and contain no ':'")]
    InvalidSceneId(String),

    /// Two scenes share an identifier.
    #[error("scene {0:?} is defined more than once")]
    DuplicateScene(String),

    /// A choice key is empty.
    #[error("scene {scene_id} has a choice with an empty key")]
    InvalidChoiceKey {
        /// Scene declaring the choice.
        scene_id: String,
    },

    /// Two choices in one scene share a key.
    #[error("scene {scene_id} declares choice {choice_key:?} more than once")]
    DuplicateChoice {
        /// Scene declaring the choices.
        scene_id: String,
        /// The repeated key.
        choice_key: String,
    },

    /// A choice leads to a scene that does not exist.
    #[error("choice {scene_id}:{choice_key} leads to undefined scene {next:?}")]
    DanglingChoice {
        /// Scene declaring the choice.
        scene_id: String,
        /// The choice key.
        choice_key: String,
        /// The missing target.
        next: String,
    },

    /// A choice's button payload exceeds the platform limit.
    #[error("payload {payload:?} is {len} bytes; the limit is {limit}")]
    PayloadTooLong {
        /// The encoded payload.
        payload: String,
        /// Its length in bytes.
        len: usize,
        /// The maximum allowed length.
        limit: usize,
    },
}
