//! The immutable compiled form of a message.

use std::collections::BTreeMap;

use icu_locale_core::Locale;

use crate::parser::{ArgStyle, ArgType};

/// A message compiled for one locale.
///
/// Holds no interior mutability: a single instance can be formatted any
/// number of times, from any number of threads.
#[derive(Debug, Clone)]
pub struct CompiledMessage {
    pub(crate) locale: Locale,
    pub(crate) root: Block,
}

impl CompiledMessage {
    /// The locale this message was compiled for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

/// A compiled message body.
#[derive(Debug, Clone)]
pub(crate) struct Block {
    pub(crate) nodes: Vec<Node>,
}

#[derive(Debug, Clone)]
pub(crate) enum Node {
    Text(String),
    Plain {
        arg_id: String,
    },
    Simple {
        arg_id: String,
        arg_type: ArgType,
        arg_style: ArgStyle,
    },
    Select {
        arg_id: String,
        branches: BTreeMap<String, Block>,
    },
    Plural(PluralNode),
    PluralValue(PluralBinding),
}

/// A plural argument with its branches split by key form.
#[derive(Debug, Clone)]
pub(crate) struct PluralNode {
    pub(crate) arg_id: String,
    pub(crate) ordinal: bool,
    pub(crate) offset: i64,
    /// `=K` branches keyed by `K`.
    pub(crate) exact: BTreeMap<i64, Block>,
    /// Keyword branches other than `other`.
    pub(crate) keywords: BTreeMap<String, Block>,
    pub(crate) other: Block,
}

/// The argument and offset a `#` marker reads: those of the innermost
/// enclosing plural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PluralBinding {
    pub(crate) arg_id: String,
    pub(crate) offset: i64,
}
