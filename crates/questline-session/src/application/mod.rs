//! Command and query handlers for the session engine.

pub mod command_handlers;
pub mod query_handlers;
