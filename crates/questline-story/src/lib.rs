//! Questline — Story Graph.
//!
//! An immutable mapping from scene identifier to scene definition, loaded
//! from a YAML document and validated once at startup. Shared read-only by
//! every session.

pub mod domain;
pub mod error;
pub mod loader;

pub use domain::graph::StoryGraph;
pub use domain::payload::ChoicePayload;
pub use domain::scene::{Choice, Scene};
pub use error::StoryError;
