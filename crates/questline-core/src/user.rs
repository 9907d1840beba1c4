//! Chat user identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a chat user as reported by the messaging platform.
///
/// Chat platforms hand out signed 64-bit ids, so the wrapped value is an
/// `i64` rather than a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
