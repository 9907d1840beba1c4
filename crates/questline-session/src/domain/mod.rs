//! Session domain types.

pub mod commands;
pub mod render;
pub mod session;
pub mod store;
