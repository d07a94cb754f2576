//! Parse error types.

use std::fmt::{self, Display, Formatter};

use strsim::levenshtein;
use thiserror::Error;

use super::decoder::Position;

/// An error that occurred during parsing. Parsing stops at the first error
/// and returns no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that does not fit the grammar at this point: a malformed
    /// delimiter, an unknown type or style keyword, or malformed
    /// select/plural syntax.
    #[error("unexpected token '{found}' at {position}{}", did_you_mean(suggestions))]
    UnexpectedToken {
        found: String,
        position: Position,
        suggestions: Vec<String>,
    },

    /// Input ended inside an argument or a branch message.
    #[error("unexpected end of input at {position}")]
    UnexpectedEof { position: Position },

    /// Branch messages nest deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at {position}")]
    NestingTooDeep { limit: usize, position: Position },

    /// The pattern exceeds the configured length limit.
    #[error("pattern is {len} bytes, limit is {limit}")]
    PatternTooLong { len: usize, limit: usize },
}

impl ParseError {
    /// Where in the pattern the error was detected, if it has a location.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEof { position }
            | ParseError::NestingTooDeep { position, .. } => Some(*position),
            ParseError::PatternTooLong { .. } => None,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.char_column)
    }
}

/// Formats a suggestion suffix like `, did you mean 'plural'?`.
pub(crate) fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
    format!(", did you mean {}?", quoted.join(" or "))
}

/// Compute typo suggestions for `name` among `available`.
///
/// Uses Levenshtein distance with a threshold of 1 for names of at most
/// three characters and 2 otherwise. Returns at most three suggestions,
/// closest first. Exact matches are not suggestions.
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.to_string())
        .collect()
}
