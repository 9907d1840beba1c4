//! Questline — Session engine.
//!
//! Owns per-user session state and the scene-navigation state machine:
//! starting a story, resolving the current scene, and validating and
//! applying choices. The engine is synchronous and performs no I/O; the
//! transport calls in per event and renders whatever comes back.

pub mod application;
pub mod domain;
pub mod in_memory_store;

pub use in_memory_store::InMemorySessionStore;
