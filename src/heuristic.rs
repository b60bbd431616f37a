//! Approximate balance of block-comment markers hidden behind a `//`.
//!
//! While inside a block comment the lexer still folds `//` and everything after
//! it into the end-of-line token, so a `*/` written after a `//` on the same
//! line would go unseen. This scan looks at that tail and guesses which marker
//! wins. It assumes conventional nesting; a wrong guess only changes the
//! continuation prompt, and the compiler has the final word.

/// What the trailing markers on a line amount to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentBalance {
    /// The last marker is `*/`: the comment has ended, however many `/*` came before.
    Closes,
    /// The last marker is `/*`: a comment has begun, whether or not earlier ones ended.
    Opens,
    /// No `//` in the text, or no marker after it.
    Neutral,
}

/// Scans forward for the first `//`, then backward from the end of `rest`
/// down to just after it, classifying the last complete marker.
#[must_use]
pub fn scan_nested_comments(rest: &str) -> CommentBalance {
    let bytes = rest.as_bytes();
    let Some(first_slash) = bytes.windows(2).position(|pair| pair == b"//") else {
        return CommentBalance::Neutral;
    };

    // Character expected next (going backward) to complete a marker.
    let mut expect: Option<u8> = None;
    for &byte in bytes[first_slash + 2..].iter().rev() {
        match byte {
            b'*' => {
                if expect == Some(b'*') {
                    return CommentBalance::Closes;
                }
                expect = Some(b'/');
            }
            b'/' => {
                if expect == Some(b'/') {
                    return CommentBalance::Opens;
                }
                expect = Some(b'*');
            }
            _ => expect = None,
        }
    }
    CommentBalance::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_comment_is_neutral() {
        assert_eq!(scan_nested_comments(""), CommentBalance::Neutral);
        assert_eq!(scan_nested_comments("a */"), CommentBalance::Neutral);
    }

    #[test]
    fn test_trailing_close() {
        assert_eq!(scan_nested_comments("// note */"), CommentBalance::Closes);
        assert_eq!(scan_nested_comments("// /* a */ b */"), CommentBalance::Closes);
    }

    #[test]
    fn test_trailing_open() {
        assert_eq!(scan_nested_comments("// x /*"), CommentBalance::Opens);
        assert_eq!(scan_nested_comments("// */ then /* "), CommentBalance::Opens);
    }

    #[test]
    fn test_close_followed_by_code_still_closes() {
        // Code after the marker is skipped over.
        assert_eq!(scan_nested_comments("// end */ f();"), CommentBalance::Closes);
    }

    #[test]
    fn test_marker_halves_do_not_count() {
        assert_eq!(scan_nested_comments("// a * / b"), CommentBalance::Neutral);
        assert_eq!(scan_nested_comments("//*"), CommentBalance::Neutral);
    }
}
