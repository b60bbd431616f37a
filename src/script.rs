use crate::error::ValidatorError;
use crate::options::ValidatorOptions;
use crate::validator::{InputValidator, Validation};
use miette::NamedSource;
use std::io::{BufRead, Lines};

/// A complete unit of input, ready for the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    /// 1-based line the statement starts on.
    pub first_line: usize,
    /// 1-based line the statement ends on.
    pub last_line: usize,
}

/// Feeds a line-oriented source through an [`InputValidator`] and yields one
/// [`Statement`] per complete unit.
///
/// Blank lines between statements are skipped, and so are units holding only
/// comments (`// note`, `/* ... */`). A mismatch yields an error and
/// reading continues with the next line. Reading stops after an I/O error or
/// at the end of input.
pub struct StatementReader<R> {
    lines: Lines<R>,
    name: String,
    validator: InputValidator,
    line_number: usize,
    first_line: usize,
    finished: bool,
}

impl<R: BufRead> StatementReader<R> {
    pub fn new(reader: R) -> Self {
        Self::new_with_name(reader, "<input>".to_string())
    }

    /// `name` labels the source in error reports.
    pub fn new_with_name(reader: R, name: String) -> Self {
        Self {
            lines: reader.lines(),
            name,
            validator: InputValidator::new(),
            line_number: 0,
            first_line: 0,
            finished: false,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.validator = InputValidator::with_options(options);
        self
    }

    fn unexpected_eof(&mut self) -> ValidatorError {
        let text = self.validator.take_input();
        let first_len = text.lines().next().map_or(0, str::len);
        ValidatorError::UnexpectedEof {
            line: self.first_line,
            src: NamedSource::new(self.name.clone(), text),
            span: (0, first_len).into(),
        }
    }
}

impl<R: BufRead> Iterator for StatementReader<R> {
    type Item = Result<Statement, ValidatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.finished = true;
                    if self.validator.input().is_empty() {
                        return None;
                    }
                    return Some(Err(self.unexpected_eof()));
                }
            };
            self.line_number += 1;

            if self.validator.input().is_empty() {
                if line.trim().is_empty() {
                    continue;
                }
                self.first_line = self.line_number;
            }

            match self.validator.validate(&line) {
                Validation::Incomplete => {}
                Validation::Complete if !self.validator.has_code() => {
                    self.validator.reset();
                }
                Validation::Complete => {
                    return Some(Ok(Statement {
                        text: self.validator.take_input(),
                        first_line: self.first_line,
                        last_line: self.line_number,
                    }));
                }
                Validation::Mismatch => {
                    let text = self.validator.take_input();
                    let offset = text.len().saturating_sub(line.len());
                    return Some(Err(ValidatorError::Mismatch {
                        line: self.line_number,
                        src: NamedSource::new(self.name.clone(), text),
                        span: (offset, line.len()).into(),
                    }));
                }
            }
        }
    }
}
