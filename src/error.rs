use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ValidatorError {
    #[error("Invalid validator options ({format}): {reason}")]
    #[diagnostic(
        code(options::invalid),
        help("Known options are `comment_brackets` (\"ignored\" or \"tracked\") and `literal_continuation` (true or false).")
    )]
    Options { format: &'static str, reason: String },

    #[error("Failed to read input: {0}")]
    #[diagnostic(code(input::io))]
    Io(#[from] std::io::Error),

    #[error("Mismatched closing delimiter on line {line}")]
    #[diagnostic(
        code(input::mismatch),
        help("The statement was discarded. Re-enter it with balanced delimiters.")
    )]
    Mismatch {
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this line closes something that is not open")]
        span: SourceSpan,
    },

    #[error("Input ended inside a statement starting on line {line}")]
    #[diagnostic(
        code(input::unexpected_eof),
        help("A bracket, block comment or literal opened here was never closed.")
    )]
    UnexpectedEof {
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("statement starts here")]
        span: SourceSpan,
    },
}
