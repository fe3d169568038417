//! Character cursor and depth-aware splitting for canonical names.
//!
//! Canonical names nest delimiters: a parameter list holds signatures that hold generic
//! argument lists that hold more signatures, and array markers contain commas. Splitting on
//! `.` or `,` is therefore only valid at nesting depth zero, which is what
//! [`split_top_level`] tracks in a single pass.

/// Characters that open a nested region
const OPENERS: [char; 3] = ['{', '(', '['];

/// Characters that close a nested region
const CLOSERS: [char; 3] = ['}', ')', ']'];

/// A cursor over the characters of a string slice.
///
/// All methods are total: reading past the end yields `None` or an empty slice, leaving error
/// reporting to the caller that knows what was expected.
pub(crate) struct Scanner<'a> {
    /// The text being scanned
    data: &'a str,
    /// Current byte position within the text
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `data`
    pub(crate) fn new(data: &'a str) -> Self {
        Scanner { data, position: 0 }
    }

    /// Current byte position
    pub(crate) fn pos(&self) -> usize {
        self.position
    }

    /// Returns true once every character has been consumed
    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The not yet consumed part of the text
    pub(crate) fn remaining(&self) -> &'a str {
        &self.data[self.position..]
    }

    /// Peek at the current character without advancing
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the current character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let current = self.peek()?;
        self.position += current.len_utf8();
        Some(current)
    }

    /// Consume the current character if it equals `expected`
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters as long as `predicate` holds and return them
    pub(crate) fn read_while<F>(&mut self, predicate: F) -> &'a str
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while let Some(current) = self.peek() {
            if !predicate(current) {
                break;
            }
            self.position += current.len_utf8();
        }
        &self.data[start..self.position]
    }

    /// Read a decimal number; `None` if there are no digits or the value overflows `u32`
    pub(crate) fn read_number(&mut self) -> Option<u32> {
        let digits = self.read_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}

/// Why [`split_top_level`] rejected its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitError {
    /// A closing delimiter without matching opener, or of the wrong type
    Unexpected(char),
    /// The text ended with open delimiters remaining
    Unclosed(char),
}

/// Split `text` on every `separator` that is not nested inside `{}`, `()` or `[]`
///
/// Mismatched or unclosed delimiters are rejected, so every returned piece is balanced.
pub(crate) fn split_top_level(text: &str, separator: char) -> Result<Vec<&str>, SplitError> {
    let mut pieces = Vec::new();
    let mut open: Vec<char> = Vec::new();
    let mut start = 0;

    for (index, current) in text.char_indices() {
        if OPENERS.contains(&current) {
            open.push(current);
        } else if let Some(kind) = CLOSERS.iter().position(|closer| *closer == current) {
            match open.pop() {
                Some(opener) if opener == OPENERS[kind] => {}
                _ => return Err(SplitError::Unexpected(current)),
            }
        } else if current == separator && open.is_empty() {
            pieces.push(&text[start..index]);
            start = index + current.len_utf8();
        }
    }

    if let Some(opener) = open.pop() {
        return Err(SplitError::Unclosed(opener));
    }

    pieces.push(&text[start..]);
    Ok(pieces)
}

/// Byte offset of the first `target` at nesting depth zero, if any
pub(crate) fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;

    for (index, current) in text.char_indices() {
        if current == target && depth == 0 {
            return Some(index);
        }
        if OPENERS.contains(&current) {
            depth += 1;
        } else if CLOSERS.contains(&current) {
            depth = depth.saturating_sub(1);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_navigation() {
        let mut scanner = Scanner::new("ab12`x");

        assert_eq!(scanner.peek(), Some('a'));
        assert_eq!(scanner.read_while(char::is_alphabetic), "ab");
        assert_eq!(scanner.read_number(), Some(12));
        assert!(scanner.eat('`'));
        assert!(!scanner.eat('`'));
        assert_eq!(scanner.pos(), 5);
        assert_eq!(scanner.remaining(), "x");
        assert_eq!(scanner.advance(), Some('x'));
        assert!(scanner.is_at_end());
        assert_eq!(scanner.advance(), None);
    }

    #[test]
    fn test_scanner_number_overflow() {
        let mut scanner = Scanner::new("99999999999");
        assert_eq!(scanner.read_number(), None);

        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.read_number(), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_scanner_multibyte() {
        let mut scanner = Scanner::new("Größe.x");
        assert_eq!(scanner.read_while(|c| c != '.'), "Größe");
        assert!(scanner.eat('.'));
        assert_eq!(scanner.remaining(), "x");
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(
            split_top_level("A.B{C.D}.E", '.').unwrap(),
            vec!["A", "B{C.D}", "E"]
        );
        assert_eq!(
            split_top_level("System.Int32[,],X{Y,Z}", ',').unwrap(),
            vec!["System.Int32[,]", "X{Y,Z}"]
        );
        assert_eq!(split_top_level("", ',').unwrap(), vec![""]);
        assert_eq!(split_top_level("a,", ',').unwrap(), vec!["a", ""]);
    }

    #[test]
    fn test_split_rejects_unbalanced() {
        assert_eq!(split_top_level("A{B", '.'), Err(SplitError::Unclosed('{')));
        assert_eq!(split_top_level("A}B", '.'), Err(SplitError::Unexpected('}')));
        assert_eq!(split_top_level("A{B]", '.'), Err(SplitError::Unexpected(']')));
    }

    #[test]
    fn test_find_top_level() {
        assert_eq!(find_top_level("N.C.M(A)", '('), Some(5));
        assert_eq!(find_top_level("N.I{X(Y)}#M(A)", '('), Some(11));
        assert_eq!(find_top_level("N.C.F", '('), None);
    }
}
