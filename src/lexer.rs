use serde::Serialize;

/// Represents the different kinds of tokens the line re-lexer can produce.
///
/// This is deliberately not a grammar: only the punctuators that matter for
/// completeness checking get their own kind. Bracket pairs are declared
/// adjacent, so a closing kind's discriminant is always its opening kind's
/// discriminant plus one.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    // == Brackets ==
    /// Left Parenthesis: `(`
    LParen = 0,
    /// Right Parenthesis: `)`
    RParen = 1,
    /// Left Square Bracket: `[`
    LSquare = 2,
    /// Right Square Bracket: `]`
    RSquare = 3,
    /// Left Brace: `{`
    LBrace = 4,
    /// Right Brace: `}`
    RBrace = 5,

    // == Comment marker halves ==
    /// Slash: `/`, either half of `/*` or `*/`.
    Slash,
    /// Asterisk: `*`, either half of `/*` or `*/`.
    Asterisk,

    // == Literal openers ==
    /// Double quote: `"`, starts a string literal.
    Quote,
    /// Apostrophe: `'`, starts a character literal.
    Apostrophe,

    // == Everything else ==
    /// Hash: `#`
    Hash,
    /// A run of identifier characters (letters, digits, `_`).
    Ident,
    /// Any other single character, whitespace included.
    Other,
    /// The end of the line. A `//` comment is folded into this token.
    Eol,
}

impl TokenKind {
    #[must_use]
    pub fn is_open_bracket(self) -> bool {
        matches!(self, Self::LParen | Self::LSquare | Self::LBrace)
    }

    #[must_use]
    pub fn is_close_bracket(self) -> bool {
        matches!(self, Self::RParen | Self::RSquare | Self::RBrace)
    }

    /// Returns `true` if `self` is the closing bracket for `open`.
    #[must_use]
    pub fn closes(self, open: TokenKind) -> bool {
        self.is_close_bracket() && open.is_open_bracket() && self as u8 == open as u8 + 1
    }

    #[must_use]
    pub fn is_quote(self) -> bool {
        matches!(self, Self::Quote | Self::Apostrophe)
    }

    /// The character that terminates a literal opened by this kind.
    #[must_use]
    pub fn quote_char(self) -> Option<char> {
        match self {
            Self::Quote => Some('"'),
            Self::Apostrophe => Some('\''),
            _ => None,
        }
    }
}

/// A token with its kind and byte span within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos_start: usize,
    pub pos_end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos_start: usize, pos_end: usize) -> Token {
        Token {
            kind,
            pos_start,
            pos_end,
        }
    }

    /// The slice of `source` this token covers.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.pos_start..self.pos_end]
    }
}

/// How a call to [`Lexer::skip_literal`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralEnd {
    /// The closing quote was found and consumed.
    Closed,
    /// The line ended first. `escaped` is set when the last character was an
    /// unconsumed backslash, i.e. the line splices into the next one.
    Unterminated { escaped: bool },
}

/// A cursor over a single line of input.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to byte offset `pos`.
    pub fn seek(&mut self, pos: usize) {
        self.chars = self.input[pos..].chars().peekable();
        self.position = pos;
    }

    /// Lexes the whole line, up to and including the `Eol` token.
    ///
    /// Literal contents are not skipped here; see [`Lexer::skip_literal`].
    pub fn lex(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.kind == TokenKind::Eol {
                break;
            }
        }
        tokens
    }

    /// Classifies the next token and advances past it.
    ///
    /// Once the line is exhausted every further call returns `Eol`.
    pub fn next_token(&mut self) -> Token {
        let start_pos = self.position;

        let kind = if let Some(char) = self.advance() {
            match char {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '[' => TokenKind::LSquare,
                ']' => TokenKind::RSquare,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '*' => TokenKind::Asterisk,
                '"' => TokenKind::Quote,
                '\'' => TokenKind::Apostrophe,
                '#' => TokenKind::Hash,
                '/' => {
                    if self.peek() == Some(&'/') {
                        self.skip_line_comment()
                    } else {
                        TokenKind::Slash
                    }
                }
                c if c.is_alphanumeric() || c == '_' => self.read_identifier(c),
                _ => TokenKind::Other,
            }
        } else {
            TokenKind::Eol
        };

        Token::new(kind, start_pos, self.position)
    }

    /// Advances past a literal opened by `quote`, honoring backslash escapes.
    ///
    /// The cursor must sit just after the opening quote, or at the start of
    /// the line when resuming a literal left open by a previous line. No
    /// tokens are produced for the literal's contents.
    pub fn skip_literal(&mut self, quote: TokenKind) -> LiteralEnd {
        let Some(closing) = quote.quote_char() else {
            return LiteralEnd::Closed;
        };

        let mut escaped = false;
        while let Some(c) = self.advance() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == closing {
                return LiteralEnd::Closed;
            }
        }
        LiteralEnd::Unterminated { escaped }
    }

    fn advance(&mut self) -> Option<char> {
        let char = self.chars.next();
        if let Some(c) = char {
            self.position += c.len_utf8();
        }
        char
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn skip_line_comment(&mut self) -> TokenKind {
        while self.advance().is_some() {}
        TokenKind::Eol
    }

    fn read_identifier(&mut self, first_char: char) -> TokenKind {
        let numeric = first_char.is_ascii_digit();
        while let Some(&c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else if c == '\'' && numeric && self.digit_separator_ahead() {
                // `1'000`: a digit separator, not a character literal.
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Ident
    }

    fn digit_separator_ahead(&self) -> bool {
        self.chars
            .clone()
            .nth(1)
            .is_some_and(|c| c.is_ascii_alphanumeric())
    }
}
