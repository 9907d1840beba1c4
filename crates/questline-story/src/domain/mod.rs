//! Story graph domain types.

pub mod graph;
pub mod payload;
pub mod scene;
