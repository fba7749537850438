//! Shared response envelopes.

use serde::{Deserialize, Serialize};

/// Confirmation envelope returned by mutating endpoints.
///
/// Serializes to `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
