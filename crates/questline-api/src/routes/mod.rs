//! Route modules.

pub mod bot;
pub mod health;
