use crate::error::ValidatorError;
use serde::{Deserialize, Serialize};

/// How brackets and quotes inside a block comment are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentBrackets {
    /// Comment bodies are opaque: no brackets or literals are tracked.
    #[default]
    Ignored,
    /// Open brackets inside a comment are pushed and a matching close bracket
    /// is popped; literals are skipped. Closing the comment discards whatever
    /// the body left open. A close bracket that matches nothing is ignored.
    Tracked,
}

/// Tunable behavior of [`InputValidator`](crate::validator::InputValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorOptions {
    pub comment_brackets: CommentBrackets,
    /// When set, a string or character literal left open at the end of a line
    /// keeps the input incomplete and continues on the next line. Otherwise
    /// the literal ends with the line and the compiler gets to reject it.
    pub literal_continuation: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            comment_brackets: CommentBrackets::Ignored,
            literal_continuation: true,
        }
    }
}

impl ValidatorOptions {
    /// Parses options from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `ValidatorError::Options` if the document is malformed or has unknown fields.
    pub fn from_json(source: &str) -> Result<Self, ValidatorError> {
        serde_json::from_str(source).map_err(|e| ValidatorError::Options {
            format: "JSON",
            reason: e.to_string(),
        })
    }

    /// Parses options from a YAML document. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns `ValidatorError::Options` if the document is malformed or has unknown fields.
    pub fn from_yaml(source: &str) -> Result<Self, ValidatorError> {
        serde_yaml::from_str(source).map_err(|e| ValidatorError::Options {
            format: "YAML",
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ValidatorOptions::default();
        assert_eq!(options.comment_brackets, CommentBrackets::Ignored);
        assert!(options.literal_continuation);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = ValidatorOptions::from_json(r#"{ "comment_brackets": "tracked" }"#).unwrap();
        assert_eq!(options.comment_brackets, CommentBrackets::Tracked);
        assert!(options.literal_continuation);
    }

    #[test]
    fn test_yaml() {
        let options = ValidatorOptions::from_yaml("literal_continuation: false\n").unwrap();
        assert_eq!(options.comment_brackets, CommentBrackets::Ignored);
        assert!(!options.literal_continuation);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = ValidatorOptions::from_json(r#"{ "nesting": true }"#).unwrap_err();
        assert!(matches!(err, ValidatorError::Options { format: "JSON", .. }));
    }

    #[test]
    fn test_bad_variant_is_rejected() {
        assert!(ValidatorOptions::from_yaml("comment_brackets: sometimes\n").is_err());
    }
}
