//! AST to compiled-tree translation.
//!
//! Validates what the grammar alone cannot guarantee for hand-built trees:
//! every plural has an `other` branch and only `=K` or CLDR category keys,
//! every `#` sits inside a plural branch, and nesting stays within the
//! configured depth.

use std::collections::BTreeMap;

use icu_locale_core::Locale;
use messageformat_syntax::{OTHER_CATEGORY, PLURAL_CATEGORY_KEYWORDS, is_plural_category};

use super::error::CompileError;
use super::tree::{Block, CompiledMessage, Node, PluralBinding, PluralNode};
use crate::options::Options;
use crate::parser::{ArgStyle, ArgType, Message, Part, compute_suggestions};

/// Compile a message for a locale tag using default [`Options`].
///
/// # Example
///
/// ```
/// use messageformat::{args, compile, parse};
///
/// let message = parse("{n, plural, one{# file} other{# files}}").unwrap();
/// let compiled = compile("en", &message).unwrap();
/// assert_eq!(compiled.format(&args! { "n" => 3 }).unwrap(), "3 files");
/// ```
pub fn compile(locale: &str, message: &Message) -> Result<CompiledMessage, CompileError> {
    compile_with_options(locale, message, &Options::default())
}

/// Compile a message for a locale tag.
///
/// # Errors
///
/// Returns [`CompileError::InvalidLocale`] if the tag does not parse, and the
/// first structural error found in the tree otherwise.
#[tracing::instrument(level = "debug", skip_all, fields(locale = locale))]
pub fn compile_with_options(
    locale: &str,
    message: &Message,
    options: &Options,
) -> Result<CompiledMessage, CompileError> {
    let parsed: Locale = locale.parse().map_err(|_| CompileError::InvalidLocale {
        tag: locale.to_string(),
    })?;
    compile_for_locale(parsed, message, options)
}

/// Compile a message for an already parsed locale.
pub fn compile_for_locale(
    locale: Locale,
    message: &Message,
    options: &Options,
) -> Result<CompiledMessage, CompileError> {
    let compiler = Compiler {
        max_depth: options.max_depth(),
    };
    let root = compiler.compile_message(message, None, 0)?;
    Ok(CompiledMessage { locale, root })
}

struct Compiler {
    max_depth: usize,
}

impl Compiler {
    /// Compile one message. `enclosing` is the binding of the innermost
    /// plural around this message, if any.
    fn compile_message(
        &self,
        message: &Message,
        enclosing: Option<&PluralBinding>,
        depth: usize,
    ) -> Result<Block, CompileError> {
        let mut nodes = Vec::with_capacity(message.parts.len());
        for part in &message.parts {
            let node = match part {
                Part::Text(value) => Node::Text(value.clone()),
                Part::PlainArg { arg_id } => Node::Plain {
                    arg_id: arg_id.clone(),
                },
                Part::SimpleArg {
                    arg_id,
                    arg_type,
                    arg_style,
                } => {
                    if *arg_type == ArgType::Invalid || *arg_style == ArgStyle::Invalid {
                        return Err(CompileError::InvalidArgumentShape {
                            arg_id: arg_id.clone(),
                        });
                    }
                    Node::Simple {
                        arg_id: arg_id.clone(),
                        arg_type: *arg_type,
                        arg_style: *arg_style,
                    }
                }
                Part::SelectArg { arg_id, categories } => {
                    // Select supplies no plural value to its branches.
                    let branches = categories
                        .iter()
                        .map(|(key, branch)| {
                            Ok((key.clone(), self.compile_branch(branch, None, depth)?))
                        })
                        .collect::<Result<BTreeMap<_, _>, CompileError>>()?;
                    Node::Select {
                        arg_id: arg_id.clone(),
                        branches,
                    }
                }
                Part::PluralArg {
                    arg_id,
                    ordinal,
                    offset,
                    categories,
                } => Node::Plural(self.compile_plural(
                    arg_id, *ordinal, *offset, categories, depth,
                )?),
                Part::PluralValue => {
                    let binding = enclosing.ok_or(CompileError::IllegalPlaceholder)?;
                    Node::PluralValue(binding.clone())
                }
            };
            nodes.push(node);
        }
        Ok(Block { nodes })
    }

    fn compile_plural(
        &self,
        arg_id: &str,
        ordinal: bool,
        offset: i64,
        categories: &BTreeMap<String, Message>,
        depth: usize,
    ) -> Result<PluralNode, CompileError> {
        if !categories.contains_key(OTHER_CATEGORY) {
            return Err(missing_other(arg_id));
        }

        // Branches bind `#` to this plural, shadowing any outer one.
        let binding = PluralBinding {
            arg_id: arg_id.to_string(),
            offset,
        };
        let mut exact = BTreeMap::new();
        let mut keywords = BTreeMap::new();
        let mut other = None;
        for (key, branch) in categories {
            if let Some(literal) = key.strip_prefix('=') {
                let value = literal
                    .parse::<i64>()
                    .map_err(|_| invalid_key(arg_id, key))?;
                exact.insert(value, self.compile_branch(branch, Some(&binding), depth)?);
            } else if key == OTHER_CATEGORY {
                other = Some(self.compile_branch(branch, Some(&binding), depth)?);
            } else if is_plural_category(key) {
                keywords.insert(
                    key.clone(),
                    self.compile_branch(branch, Some(&binding), depth)?,
                );
            } else {
                return Err(invalid_key(arg_id, key));
            }
        }
        let other = other.ok_or_else(|| missing_other(arg_id))?;

        Ok(PluralNode {
            arg_id: binding.arg_id,
            ordinal,
            offset,
            exact,
            keywords,
            other,
        })
    }

    fn compile_branch(
        &self,
        branch: &Message,
        enclosing: Option<&PluralBinding>,
        depth: usize,
    ) -> Result<Block, CompileError> {
        if depth >= self.max_depth {
            return Err(CompileError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.compile_message(branch, enclosing, depth + 1)
    }
}

/// Error for a plural key that is neither `=<integer>` nor a CLDR category.
fn invalid_key(arg_id: &str, key: &str) -> CompileError {
    CompileError::InvalidCategoryKey {
        arg_id: arg_id.to_string(),
        key: key.to_string(),
        suggestions: compute_suggestions(key, PLURAL_CATEGORY_KEYWORDS.iter().copied()),
    }
}

fn missing_other(arg_id: &str) -> CompileError {
    CompileError::MissingRequiredCategory {
        arg_id: arg_id.to_string(),
    }
}
