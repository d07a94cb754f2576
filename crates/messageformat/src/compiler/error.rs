//! Compile error types.

use thiserror::Error;

use crate::parser::error::did_you_mean;

/// An error that occurred while compiling a message for a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The locale tag could not be parsed.
    #[error("invalid locale '{tag}'")]
    InvalidLocale { tag: String },

    /// A plural argument lacks the mandatory `other` category.
    #[error("plural argument '{arg_id}' is missing the required 'other' category")]
    MissingRequiredCategory { arg_id: String },

    /// A `#` marker appears outside every plural branch.
    #[error("'#' is only allowed inside a plural branch")]
    IllegalPlaceholder,

    /// A simple argument carries an invalid type or style.
    #[error("argument '{arg_id}' has an invalid type or style")]
    InvalidArgumentShape { arg_id: String },

    /// A plural key is neither `=<integer>` nor a CLDR category keyword.
    #[error(
        "plural argument '{arg_id}' has invalid category key '{key}'{}",
        did_you_mean(suggestions)
    )]
    InvalidCategoryKey {
        arg_id: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// Branch messages nest deeper than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
