//! One-code-point-lookahead cursor over pattern text.

use std::str::Chars;

use serde::{Deserialize, Serialize};

/// A location in the pattern, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    /// Column counted in bytes.
    pub byte_column: usize,
    /// Column counted in code points.
    pub char_column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            byte_column: 1,
            char_column: 1,
        }
    }
}

/// Forward-only cursor with exactly one code point of lookahead.
///
/// There is no backtracking: callers capture whatever they need before
/// calling [`Decoder::decode`] again.
///
/// # Example
///
/// ```
/// use messageformat::parser::Decoder;
///
/// let mut d = Decoder::new("hé");
/// assert_eq!(d.peek(), Some('h'));
/// assert!(d.decode());
/// assert_eq!(d.decoded(), 'h');
/// assert!(d.decode());
/// assert_eq!(d.decoded(), 'é');
/// assert_eq!(d.peek(), None);
/// assert!(!d.decode());
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    chars: Chars<'a>,
    current: char,
    next: Option<char>,
    /// Position of `next`.
    position: Position,
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut chars = input.chars();
        let next = chars.next();
        Self {
            chars,
            current: char::REPLACEMENT_CHARACTER,
            next,
            position: Position::default(),
        }
    }

    /// Advance one code point. Returns false at end of input, leaving the
    /// cursor unchanged.
    pub fn decode(&mut self) -> bool {
        let Some(c) = self.next else {
            return false;
        };
        self.current = c;
        if c == '\n' {
            self.position.line += 1;
            self.position.byte_column = 1;
            self.position.char_column = 1;
        } else {
            self.position.byte_column += c.len_utf8();
            self.position.char_column += 1;
        }
        self.next = self.chars.next();
        true
    }

    /// The code point consumed by the last successful [`Decoder::decode`].
    ///
    /// Returns U+FFFD before anything has been decoded.
    pub fn decoded(&self) -> char {
        self.current
    }

    /// The next code point without consuming it, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.next
    }

    /// Position of the next, not yet consumed, code point.
    pub fn position(&self) -> Position {
        self.position
    }
}
