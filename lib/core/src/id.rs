//! Strongly-typed identifiers.
//!
//! IDs use ULID format, so invocations sort by creation time when listed
//! in logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Unique identifier for a single remote generation invocation.
///
/// Text and chat calls are tagged with one of these so results and log
/// lines can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvocationId(Ulid);

impl InvocationId {
    const PREFIX: &'static str = "llm";

    /// Creates a new ID with a freshly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", Self::PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_id_display_format() {
        let id = InvocationId::new();
        let display = id.to_string();
        assert_eq!(display, format!("llm_{}", id.0));
        assert_eq!(display.len(), "llm_".len() + 26);
    }

    #[test]
    fn ids_are_distinct() {
        assert_ne!(InvocationId::new(), InvocationId::new());
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = InvocationId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.0));
        let parsed: InvocationId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
