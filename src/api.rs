use crate::error::ValidatorError;
use crate::script::{Statement, StatementReader};
use crate::validator::{InputValidator, Validation};

/// Classifies a whole block of text as if it had been typed line by line.
///
/// Stops at the first mismatch. Empty text is `Complete`.
#[must_use]
pub fn check(source: &str) -> Validation {
    let mut validator = InputValidator::new();
    let mut result = Validation::Complete;
    for line in source.lines() {
        result = validator.validate(line);
        if result == Validation::Mismatch {
            break;
        }
    }
    result
}

/// Splits a script into complete statements.
///
/// # Arguments
///
/// * `source` - The script text.
/// * `file_name` - Name used to label the source in error reports.
///
/// # Errors
///
/// Returns the first `ValidatorError` met: a mismatched closing delimiter, or
/// input ending inside an open statement.
pub fn split_statements(source: &str, file_name: &str) -> Result<Vec<Statement>, ValidatorError> {
    StatementReader::new_with_name(source.as_bytes(), file_name.to_string()).collect()
}
