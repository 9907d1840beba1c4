//! Questline Core — shared domain abstractions.
//!
//! This crate defines the identifiers, traits, and error types that the
//! story graph and the session engine both depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod user;
