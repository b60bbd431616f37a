use crate::lexer::TokenKind;
use log::trace;
use serde::Serialize;

/// Something that is currently open and waiting to be closed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(tag = "entry", content = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// An opening bracket: `LParen`, `LSquare` or `LBrace`.
    Bracket(TokenKind),
    /// A block comment opened with `/*`.
    Comment,
    /// A string or character literal left unterminated at the end of a line.
    /// Holds the `Quote` or `Apostrophe` kind that opened it.
    Literal(TokenKind),
}

/// LIFO stack of open delimiters.
///
/// Underflow means the validator and the stack have gone out of sync. That is
/// a bug, not bad input, so it panics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterStack {
    entries: Vec<Entry>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        trace!("push {entry:?} at depth {}", self.entries.len());
        self.entries.push(entry);
    }

    /// # Panics
    ///
    /// Panics if the stack is empty.
    pub fn pop(&mut self) -> Entry {
        let Some(entry) = self.entries.pop() else {
            panic!("pop from an empty delimiter stack");
        };
        trace!("pop {entry:?} to depth {}", self.entries.len());
        entry
    }

    #[must_use]
    pub fn top(&self) -> Option<Entry> {
        self.entries.last().copied()
    }

    /// Searches the whole stack, not only the top.
    #[must_use]
    pub fn contains(&self, entry: Entry) -> bool {
        self.entries.contains(&entry)
    }

    /// Pops entries until one equal to `target` has been popped.
    ///
    /// # Panics
    ///
    /// Panics if the stack runs out before `target` is found.
    pub fn unwind(&mut self, target: Entry) {
        loop {
            match self.entries.pop() {
                Some(entry) if entry == target => break,
                Some(entry) => trace!("discard {entry:?} while unwinding to {target:?}"),
                None => panic!("delimiter stack exhausted while unwinding to {target:?}"),
            }
        }
        trace!("unwound to {target:?}, depth {}", self.entries.len());
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Bottom-to-top view of the entries.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Bracket(TokenKind::LParen));
        stack.push(Entry::Comment);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top(), Some(Entry::Comment));
        assert_eq!(stack.pop(), Entry::Comment);
        assert_eq!(stack.pop(), Entry::Bracket(TokenKind::LParen));
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_contains_looks_below_top() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Comment);
        stack.push(Entry::Bracket(TokenKind::LBrace));
        assert!(stack.contains(Entry::Comment));
        assert!(!stack.contains(Entry::Bracket(TokenKind::LParen)));
    }

    #[test]
    fn test_unwind_discards_everything_above_target() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Bracket(TokenKind::LBrace));
        stack.push(Entry::Comment);
        stack.push(Entry::Bracket(TokenKind::LParen));
        stack.push(Entry::Bracket(TokenKind::LSquare));
        stack.unwind(Entry::Comment);
        assert_eq!(stack.entries(), &[Entry::Bracket(TokenKind::LBrace)]);
    }

    #[test]
    fn test_unwind_stops_at_first_match() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Comment);
        stack.push(Entry::Bracket(TokenKind::LParen));
        stack.push(Entry::Comment);
        stack.unwind(Entry::Comment);
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_unwind_without_target_panics() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Bracket(TokenKind::LParen));
        stack.unwind(Entry::Comment);
    }

    #[test]
    #[should_panic(expected = "empty delimiter stack")]
    fn test_pop_empty_panics() {
        DelimiterStack::new().pop();
    }

    #[test]
    fn test_clear() {
        let mut stack = DelimiterStack::new();
        stack.push(Entry::Literal(TokenKind::Quote));
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.iter().count(), 0);
    }
}
