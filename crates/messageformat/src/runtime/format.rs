//! Formatting of compiled messages against an argument set.

use std::collections::HashMap;

use icu_locale_core::Locale;

use super::error::FormatError;
use super::plural::{CldrPluralResolver, PluralResolver, category_keyword};
use super::value_format::{PlainValueFormatter, SimpleArgument, ValueFormatter};
use crate::compiler::CompiledMessage;
use crate::compiler::tree::{Block, Node, PluralNode};
use crate::parser::compute_suggestions;
use crate::types::{Value, ValueKind};

/// The external collaborators consulted while formatting.
///
/// # Example
///
/// ```
/// use messageformat::{
///     Collaborators, Locale, PluralCategory, PluralResolver, args, compile, parse,
/// };
///
/// struct AlwaysFew;
///
/// impl PluralResolver for AlwaysFew {
///     fn resolve_category(&self, _: &Locale, _: i64, _: bool) -> PluralCategory {
///         PluralCategory::Few
///     }
/// }
///
/// let message = parse("{n, plural, few{a few} other{lots}}").unwrap();
/// let compiled = compile("en", &message).unwrap();
/// let collaborators = Collaborators::default().with_plurals(&AlwaysFew);
/// let text = compiled.format_with(&args! { "n" => 100 }, &collaborators).unwrap();
/// assert_eq!(text, "a few");
/// ```
#[derive(Clone, Copy)]
pub struct Collaborators<'r> {
    pub plurals: &'r dyn PluralResolver,
    pub values: &'r dyn ValueFormatter,
}

impl Default for Collaborators<'static> {
    fn default() -> Self {
        Self {
            plurals: &CldrPluralResolver,
            values: &PlainValueFormatter,
        }
    }
}

impl<'r> Collaborators<'r> {
    /// Replace the plural category resolver.
    pub fn with_plurals(self, plurals: &'r dyn PluralResolver) -> Self {
        Self { plurals, ..self }
    }

    /// Replace the simple argument formatter.
    pub fn with_values(self, values: &'r dyn ValueFormatter) -> Self {
        Self { values, ..self }
    }
}

impl CompiledMessage {
    /// Format with the CLDR plural resolver and the plain value formatter.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered walking the message; no partial
    /// output is produced.
    pub fn format(&self, arguments: &HashMap<String, Value>) -> Result<String, FormatError> {
        self.format_with(arguments, &Collaborators::default())
    }

    /// Format with injected collaborators.
    pub fn format_with(
        &self,
        arguments: &HashMap<String, Value>,
        collaborators: &Collaborators<'_>,
    ) -> Result<String, FormatError> {
        let walker = Walker {
            locale: &self.locale,
            arguments,
            collaborators,
        };
        let mut out = String::new();
        walker.write_block(&self.root, &mut out)?;
        Ok(out)
    }
}

struct Walker<'a> {
    locale: &'a Locale,
    arguments: &'a HashMap<String, Value>,
    collaborators: &'a Collaborators<'a>,
}

impl Walker<'_> {
    fn write_block(&self, block: &Block, out: &mut String) -> Result<(), FormatError> {
        for node in &block.nodes {
            match node {
                Node::Text(value) => out.push_str(value),
                Node::Plain { arg_id } => out.push_str(self.string_argument(arg_id)?),
                Node::Simple {
                    arg_id,
                    arg_type,
                    arg_style,
                } => {
                    let argument = SimpleArgument {
                        locale: self.locale,
                        arg_id,
                        arg_type: *arg_type,
                        arg_style: *arg_style,
                        value: self.argument(arg_id)?,
                    };
                    self.collaborators.values.format_value(&argument, out)?;
                }
                Node::Select { arg_id, branches } => {
                    let value = self.string_argument(arg_id)?;
                    let branch = branches.get(value).ok_or_else(|| {
                        FormatError::UnmatchedSelectCategory {
                            name: arg_id.clone(),
                            value: value.to_string(),
                            suggestions: compute_suggestions(
                                value,
                                branches.keys().map(String::as_str),
                            ),
                        }
                    })?;
                    tracing::trace!(arg_id = %arg_id, value, "select branch");
                    self.write_block(branch, out)?;
                }
                Node::Plural(plural) => self.write_plural(plural, out)?,
                Node::PluralValue(binding) => {
                    let n = self.integer_argument(&binding.arg_id)?;
                    let value = apply_offset(&binding.arg_id, n, binding.offset)?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(())
    }

    /// Exact `=n` match first, then the resolver's category for
    /// `n - offset`, then `other`.
    fn write_plural(&self, plural: &PluralNode, out: &mut String) -> Result<(), FormatError> {
        let n = self.integer_argument(&plural.arg_id)?;
        let branch = match plural.exact.get(&n) {
            Some(branch) => branch,
            None => {
                let operand = apply_offset(&plural.arg_id, n, plural.offset)?;
                let category =
                    self.collaborators
                        .plurals
                        .resolve_category(self.locale, operand, plural.ordinal);
                let keyword = category_keyword(category);
                tracing::trace!(arg_id = %plural.arg_id, operand, keyword, "plural category");
                plural.keywords.get(keyword).unwrap_or(&plural.other)
            }
        };
        self.write_block(branch, out)
    }

    fn argument(&self, name: &str) -> Result<&Value, FormatError> {
        self.arguments
            .get(name)
            .ok_or_else(|| FormatError::MissingArgument {
                name: name.to_string(),
            })
    }

    fn string_argument(&self, name: &str) -> Result<&str, FormatError> {
        let value = self.argument(name)?;
        value.as_str().ok_or_else(|| mismatch(name, ValueKind::String, value))
    }

    fn integer_argument(&self, name: &str) -> Result<i64, FormatError> {
        let value = self.argument(name)?;
        value
            .as_integer()
            .ok_or_else(|| mismatch(name, ValueKind::Integer, value))
    }
}

fn apply_offset(name: &str, n: i64, offset: i64) -> Result<i64, FormatError> {
    n.checked_sub(offset)
        .ok_or_else(|| FormatError::OperandOverflow {
            name: name.to_string(),
        })
}

fn mismatch(name: &str, expected: ValueKind, actual: &Value) -> FormatError {
    FormatError::ArgumentTypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}
