use crate::stack::Entry;
use serde::Serialize;

/// A point-in-time view of a validator, for front ends that display or log
/// what is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub input: String,
    /// Outermost first.
    pub open: Vec<Entry>,
    pub in_comment: bool,
    pub depth: usize,
}

impl Snapshot {
    /// Serializes the snapshot into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the snapshot into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
