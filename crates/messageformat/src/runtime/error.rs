//! Format error types.

use thiserror::Error;

use crate::parser::error::did_you_mean;
use crate::types::ValueKind;

/// An error that occurred while formatting a compiled message. No partial
/// output accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No value was supplied for an argument the message reads.
    #[error("missing argument '{name}'")]
    MissingArgument { name: String },

    /// The supplied value has the wrong kind for how the message uses it.
    #[error("argument '{name}' must be {expected}, got {actual}")]
    ArgumentTypeMismatch {
        name: String,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A select argument's value has no branch of the same name.
    #[error("select argument '{name}' has no branch for '{value}'{}", did_you_mean(suggestions))]
    UnmatchedSelectCategory {
        name: String,
        value: String,
        suggestions: Vec<String>,
    },

    /// Subtracting the plural offset overflowed.
    #[error("plural operand of argument '{name}' overflows after applying the offset")]
    OperandOverflow { name: String },
}
