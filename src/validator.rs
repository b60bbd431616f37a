use crate::heuristic::{scan_nested_comments, CommentBalance};
use crate::lexer::{Lexer, LiteralEnd, TokenKind};
use crate::options::{CommentBrackets, ValidatorOptions};
use crate::serialization::Snapshot;
use crate::stack::{DelimiterStack, Entry};
use log::debug;
use serde::Serialize;

/// The verdict on the input accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Validation {
    /// Every delimiter is closed; the buffer can go to the compiler.
    Complete,
    /// Something is still open; ask for another line.
    Incomplete,
    /// A closing bracket did not match the innermost open one.
    Mismatch,
}

/// Which half of a two-character comment marker the scan is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Slash,
    Asterisk,
}

impl Marker {
    fn completed_by(self, kind: TokenKind) -> bool {
        match self {
            Marker::Slash => kind == TokenKind::Slash,
            Marker::Asterisk => kind == TokenKind::Asterisk,
        }
    }
}

/// Decides, line by line, whether interactive input forms a closed unit.
///
/// The check is lexical only: brackets, block comments and quoted literals are
/// balanced, nothing else. One instance serves one input stream; call
/// [`reset`](Self::reset) after handing a complete buffer on, or after a
/// mismatch.
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    input: String,
    stack: DelimiterStack,
    options: ValidatorOptions,
    // The last line ended inside a literal on an escaping backslash.
    line_splice: bool,
    // Something other than whitespace or comments has been seen since the last reset.
    has_code: bool,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Scans `line`, appends it to the buffer and classifies the result.
    ///
    /// The line is appended whatever the verdict.
    pub fn validate(&mut self, line: &str) -> Validation {
        let continues_literal = matches!(self.stack.top(), Some(Entry::Literal(_)));
        let separator = if continues_literal && !self.line_splice {
            "\\n"
        } else {
            "\n"
        };

        let result = self.scan(line);

        if !self.input.is_empty() {
            self.input.push_str(separator);
        }
        self.input.push_str(line);

        debug!(
            "validated line ({} bytes): {result:?}, {} open",
            line.len(),
            self.stack.depth()
        );
        result
    }

    fn scan(&mut self, line: &str) -> Validation {
        let mut lexer = Lexer::new(line);

        if let Some(Entry::Literal(quote)) = self.stack.top() {
            self.has_code = true;
            match lexer.skip_literal(quote) {
                LiteralEnd::Closed => {
                    self.stack.pop();
                }
                LiteralEnd::Unterminated { escaped } => {
                    self.line_splice = escaped;
                    return Validation::Incomplete;
                }
            }
        }
        self.line_splice = false;

        // Quotes in `#error don't` or `#include "x` never continue onto the next line.
        let directive = lexer.position() == 0 && line.trim_start().starts_with('#');

        let mut in_comment = self.stack.contains(Entry::Comment);
        let mut expect = if in_comment {
            Marker::Asterisk
        } else {
            Marker::Slash
        };

        loop {
            let token = lexer.next_token();
            let kind = token.kind;

            if expect.completed_by(kind) {
                match (expect, in_comment) {
                    (Marker::Slash, false) => expect = Marker::Asterisk,
                    (Marker::Asterisk, false) => {
                        self.stack.push(Entry::Comment);
                        in_comment = true;
                    }
                    (Marker::Asterisk, true) => expect = Marker::Slash,
                    (Marker::Slash, true) => {
                        self.stack.unwind(Entry::Comment);
                        in_comment = false;
                    }
                }
                continue;
            }

            if in_comment {
                // `*//`: the `*/` closes before the rest is read as a line comment.
                if kind == TokenKind::Eol
                    && expect == Marker::Slash
                    && token.text(line).starts_with("//")
                {
                    self.stack.unwind(Entry::Comment);
                    in_comment = false;
                    lexer.seek(token.pos_start + 1);
                    continue;
                }
                if kind == TokenKind::Eol {
                    if scan_nested_comments(token.text(line)) == CommentBalance::Closes {
                        self.stack.unwind(Entry::Comment);
                    }
                    break;
                }
                // `**/` still closes; anything else restarts the wait for `*`.
                if expect == Marker::Slash && kind != TokenKind::Asterisk {
                    expect = Marker::Asterisk;
                }
                if self.options.comment_brackets == CommentBrackets::Ignored {
                    continue;
                }
            } else {
                // A `/` that did not open a comment was code after all.
                if expect == Marker::Asterisk
                    || (kind != TokenKind::Eol && !token.text(line).trim().is_empty())
                {
                    self.has_code = true;
                }
                expect = Marker::Slash;
            }

            match kind {
                TokenKind::Eol => break,
                k if k.is_open_bracket() => self.stack.push(Entry::Bracket(k)),
                k if k.is_close_bracket() => match self.stack.top() {
                    Some(Entry::Bracket(open)) if k.closes(open) => {
                        self.stack.pop();
                    }
                    _ if in_comment => {}
                    _ => return Validation::Mismatch,
                },
                k if k.is_quote() => {
                    if let LiteralEnd::Unterminated { escaped } = lexer.skip_literal(k) {
                        if self.options.literal_continuation && !in_comment && !directive {
                            self.stack.push(Entry::Literal(k));
                            self.line_splice = escaped;
                        }
                    }
                }
                _ => {}
            }
        }

        if self.stack.is_empty() {
            Validation::Complete
        } else {
            Validation::Incomplete
        }
    }

    /// Clears the buffer and every open delimiter.
    pub fn reset(&mut self) {
        self.input.clear();
        self.stack.clear();
        self.line_splice = false;
        self.has_code = false;
    }

    /// The logical input assembled so far.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Hands over the buffer and resets the validator.
    pub fn take_input(&mut self) -> String {
        let input = std::mem::take(&mut self.input);
        self.reset();
        input
    }

    /// Whether the buffer holds anything besides whitespace and comments.
    #[must_use]
    pub fn has_code(&self) -> bool {
        self.has_code
    }

    /// Number of delimiters still open.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    #[must_use]
    pub fn in_comment(&self) -> bool {
        self.stack.contains(Entry::Comment)
    }

    /// Open delimiters, outermost first.
    #[must_use]
    pub fn open_entries(&self) -> &[Entry] {
        self.stack.entries()
    }

    #[must_use]
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input.clone(),
            open: self.stack.entries().to_vec(),
            in_comment: self.in_comment(),
            depth: self.stack.depth(),
        }
    }
}
