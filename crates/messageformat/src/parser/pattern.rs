//! Recursive-descent pattern parser.
//!
//! Consumes a [`Decoder`] and produces a [`Message`]. Handles:
//! - Literal text with ICU apostrophe quoting
//! - `{id}`, `{id, type}` and `{id, type, style}` arguments
//! - `select`, `plural` and `selectordinal` arguments with nested messages
//! - The `#` plural value marker inside plural branches

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use messageformat_syntax::{
    OFFSET_KEYWORD, PLURAL_KEYWORD, SELECT_KEYWORD, SELECT_ORDINAL_KEYWORD, STYLE_KEYWORDS,
    accepted_argument_keywords, is_identifier_char, is_pattern_white_space, needs_quoting,
};

use super::ast::{ArgStyle, ArgType, Message, Part};
use super::decoder::{Decoder, Position};
use super::error::{ParseError, compute_suggestions};
use crate::options::Options;

/// Parse a pattern string into a message using default [`Options`].
///
/// # Example
///
/// ```
/// use messageformat::parser::{Part, parse};
///
/// let message = parse("Hello, {name}!").unwrap();
/// assert_eq!(message.parts[1], Part::PlainArg { arg_id: "name".into() });
/// ```
pub fn parse(pattern: &str) -> Result<Message, ParseError> {
    parse_with_options(pattern, &Options::default())
}

/// Parse a pattern string into a message.
///
/// # Errors
///
/// Returns the first syntax error. No partial tree is produced.
#[tracing::instrument(level = "debug", skip_all, fields(len = pattern.len()))]
pub fn parse_with_options(pattern: &str, options: &Options) -> Result<Message, ParseError> {
    if let Some(limit) = options.max_pattern_len() {
        if pattern.len() > limit {
            return Err(ParseError::PatternTooLong {
                len: pattern.len(),
                limit,
            });
        }
    }
    let mut parser = Parser {
        decoder: Decoder::new(pattern),
        max_depth: options.max_depth(),
    };
    parser.parse_message(0, false)
}

struct Parser<'a> {
    decoder: Decoder<'a>,
    max_depth: usize,
}

impl Parser<'_> {
    /// Parse parts until end of input (depth 0 only) or an unconsumed `}`
    /// (required when depth > 0; the caller consumes it).
    fn parse_message(&mut self, depth: usize, in_plural: bool) -> Result<Message, ParseError> {
        let mut parts = Vec::new();
        loop {
            match self.decoder.peek() {
                None if depth == 0 => break,
                None => return Err(self.unexpected()),
                Some('{') => parts.push(self.parse_argument(depth)?),
                Some('}') if depth > 0 => break,
                Some('#') if in_plural => {
                    self.decoder.decode();
                    parts.push(Part::PluralValue);
                }
                Some(_) => parts.push(Part::Text(self.parse_message_text(depth, in_plural))),
            }
        }
        Ok(Message { parts })
    }

    /// Scan literal text, resolving apostrophe quoting.
    ///
    /// Stops without consuming at an unquoted `{`, at an unquoted `}` when
    /// nested, and at an unquoted `#` inside a plural branch.
    fn parse_message_text(&mut self, depth: usize, in_plural: bool) -> String {
        let mut text = String::new();
        let mut quoted = false;
        while let Some(next) = self.decoder.peek() {
            if quoted {
                self.decoder.decode();
                if next != '\'' {
                    text.push(next);
                } else if self.decoder.peek() == Some('\'') {
                    self.decoder.decode();
                    text.push('\'');
                } else {
                    quoted = false;
                }
                continue;
            }
            match next {
                '{' => break,
                '}' if depth > 0 => break,
                '#' if in_plural => break,
                '\'' => {
                    self.decoder.decode();
                    match self.decoder.peek() {
                        Some('\'') => {
                            self.decoder.decode();
                            text.push('\'');
                        }
                        Some(c) if needs_quoting(c, in_plural) => quoted = true,
                        _ => text.push('\''),
                    }
                }
                _ => {
                    self.decoder.decode();
                    text.push(self.decoder.decoded());
                }
            }
        }
        text
    }

    /// Parse `{ argId ... }` starting at the opening brace.
    fn parse_argument(&mut self, depth: usize) -> Result<Part, ParseError> {
        self.expect('{')?;
        self.skip_white_space();
        let position = self.decoder.position();
        let arg_id = self.required_identifier()?;
        if is_padded_number(&arg_id) {
            return Err(ParseError::UnexpectedToken {
                found: arg_id,
                position,
                suggestions: Vec::new(),
            });
        }
        self.skip_white_space();

        match self.decoder.peek() {
            Some('}') => {
                self.decoder.decode();
                Ok(Part::PlainArg { arg_id })
            }
            Some(',') => {
                self.decoder.decode();
                self.skip_white_space();
                let position = self.decoder.position();
                let keyword = self.required_identifier()?;
                self.skip_white_space();
                match keyword.as_str() {
                    SELECT_KEYWORD => {
                        self.expect(',')?;
                        self.parse_select(arg_id, depth)
                    }
                    PLURAL_KEYWORD => {
                        self.expect(',')?;
                        self.parse_plural(arg_id, false, depth)
                    }
                    SELECT_ORDINAL_KEYWORD => {
                        self.expect(',')?;
                        self.parse_plural(arg_id, true, depth)
                    }
                    _ => self.parse_simple(arg_id, &keyword, position),
                }
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Parse the rest of `{id, type}` or `{id, type, style}` after the type
    /// keyword.
    fn parse_simple(
        &mut self,
        arg_id: String,
        keyword: &str,
        position: Position,
    ) -> Result<Part, ParseError> {
        let arg_type = ArgType::from_keyword(keyword);
        if arg_type == ArgType::Invalid {
            return Err(ParseError::UnexpectedToken {
                found: keyword.to_string(),
                position,
                suggestions: compute_suggestions(keyword, accepted_argument_keywords()),
            });
        }

        let arg_style = match self.decoder.peek() {
            Some('}') => ArgStyle::Default,
            Some(',') => {
                self.decoder.decode();
                self.skip_white_space();
                let position = self.decoder.position();
                let style = self.required_identifier()?;
                let arg_style = ArgStyle::from_keyword(&style);
                if arg_style == ArgStyle::Invalid {
                    return Err(ParseError::UnexpectedToken {
                        suggestions: compute_suggestions(&style, STYLE_KEYWORDS.iter().copied()),
                        found: style,
                        position,
                    });
                }
                self.skip_white_space();
                arg_style
            }
            _ => return Err(self.unexpected()),
        };

        self.expect('}')?;
        Ok(Part::SimpleArg {
            arg_id,
            arg_type,
            arg_style,
        })
    }

    /// Parse `key{message} ...}` after `select,`.
    fn parse_select(&mut self, arg_id: String, depth: usize) -> Result<Part, ParseError> {
        let mut categories = BTreeMap::new();
        loop {
            self.skip_white_space();
            if self.decoder.peek() == Some('}') {
                break;
            }
            let position = self.decoder.position();
            let key = self.required_identifier()?;
            self.skip_white_space();
            let message = self.parse_branch(depth, false)?;
            insert_category(&mut categories, key, message, position)?;
        }
        if categories.is_empty() {
            return Err(self.unexpected());
        }
        self.decoder.decode();
        Ok(Part::SelectArg { arg_id, categories })
    }

    /// Parse `[offset:N] key{message} ...}` after `plural,` or
    /// `selectordinal,`.
    fn parse_plural(
        &mut self,
        arg_id: String,
        ordinal: bool,
        depth: usize,
    ) -> Result<Part, ParseError> {
        let mut offset = 0;
        let mut categories = BTreeMap::new();
        let mut offset_allowed = true;
        loop {
            self.skip_white_space();
            let position = self.decoder.position();
            let key = match self.decoder.peek() {
                Some('}') => break,
                Some('=') => {
                    self.decoder.decode();
                    format!("={}", self.integer()?)
                }
                _ => {
                    let word = self.required_identifier()?;
                    if offset_allowed && word == OFFSET_KEYWORD && self.decoder.peek() == Some(':')
                    {
                        self.decoder.decode();
                        self.skip_white_space();
                        offset = self.integer()?;
                        offset_allowed = false;
                        continue;
                    }
                    word
                }
            };
            offset_allowed = false;
            self.skip_white_space();
            let message = self.parse_branch(depth, true)?;
            insert_category(&mut categories, key, message, position)?;
        }
        if categories.is_empty() {
            return Err(self.unexpected());
        }
        self.decoder.decode();
        Ok(Part::PluralArg {
            arg_id,
            ordinal,
            offset,
            categories,
        })
    }

    /// Parse `{message}` one level deeper than `depth`.
    fn parse_branch(&mut self, depth: usize, in_plural: bool) -> Result<Message, ParseError> {
        if self.decoder.peek() != Some('{') {
            return Err(self.unexpected());
        }
        if depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: self.decoder.position(),
            });
        }
        self.decoder.decode();
        let message = self.parse_message(depth + 1, in_plural)?;
        self.expect('}')?;
        Ok(message)
    }

    /// Scan an identifier: everything up to pattern white space or syntax.
    fn identifier(&mut self) -> String {
        let mut id = String::new();
        while self.decoder.peek().is_some_and(is_identifier_char) {
            self.decoder.decode();
            id.push(self.decoder.decoded());
        }
        id
    }

    fn required_identifier(&mut self) -> Result<String, ParseError> {
        let id = self.identifier();
        if id.is_empty() {
            return Err(self.unexpected());
        }
        Ok(id)
    }

    /// Scan a decimal integer with an optional leading `-`.
    fn integer(&mut self) -> Result<i64, ParseError> {
        let position = self.decoder.position();
        let negative = self.decoder.peek() == Some('-');
        if negative {
            self.decoder.decode();
        }
        let digits = self.required_identifier()?;
        let literal = if negative { format!("-{digits}") } else { digits };
        literal
            .parse::<i64>()
            .map_err(|_| ParseError::UnexpectedToken {
                found: literal,
                position,
                suggestions: Vec::new(),
            })
    }

    fn skip_white_space(&mut self) {
        while self.decoder.peek().is_some_and(is_pattern_white_space) {
            self.decoder.decode();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.decoder.peek() != Some(expected) {
            return Err(self.unexpected());
        }
        self.decoder.decode();
        Ok(())
    }

    /// Error describing the next, unconsumed code point.
    fn unexpected(&self) -> ParseError {
        let position = self.decoder.position();
        match self.decoder.peek() {
            Some(c) => ParseError::UnexpectedToken {
                found: c.to_string(),
                position,
                suggestions: Vec::new(),
            },
            None => ParseError::UnexpectedEof { position },
        }
    }
}

/// An all-digit argument id with a leading zero, such as `01`. Numbered
/// arguments are `0` or start with a nonzero digit.
fn is_padded_number(arg_id: &str) -> bool {
    arg_id.len() > 1 && arg_id.starts_with('0') && arg_id.bytes().all(|b| b.is_ascii_digit())
}

fn insert_category(
    categories: &mut BTreeMap<String, Message>,
    key: String,
    message: Message,
    position: Position,
) -> Result<(), ParseError> {
    match categories.entry(key) {
        Entry::Occupied(entry) => Err(ParseError::UnexpectedToken {
            found: entry.key().clone(),
            position,
            suggestions: Vec::new(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(message);
            Ok(())
        }
    }
}
