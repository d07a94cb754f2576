//! Public AST types for MessageFormat patterns.
//!
//! These types are public so that tooling can build, inspect, and store
//! messages without going through the text syntax. A hand-built tree is not
//! validated until it is compiled.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A parsed pattern: literal text and arguments, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub parts: Vec<Part>,
}

/// A node within a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Part {
    /// Literal text with quoting already resolved.
    Text(String),
    /// `{name}`: substitute a string argument verbatim.
    PlainArg { arg_id: String },
    /// `{name, type}` or `{name, type, style}`: rendering is delegated to a
    /// value formatter.
    SimpleArg {
        arg_id: String,
        arg_type: ArgType,
        arg_style: ArgStyle,
    },
    /// `{name, select, key{...} ...}`: exact string dispatch.
    SelectArg {
        arg_id: String,
        categories: BTreeMap<String, Message>,
    },
    /// `{n, plural, ...}` or `{n, selectordinal, ...}`: numeric dispatch.
    /// Keys are `=<integer>` or plural category keywords; `other` is required
    /// by the compiler.
    PluralArg {
        arg_id: String,
        ordinal: bool,
        offset: i64,
        categories: BTreeMap<String, Message>,
    },
    /// `#`: the operand of the innermost enclosing plural, minus its offset.
    PluralValue,
}

impl Message {
    /// Create a message from its parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// Create a message consisting of one literal text part.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(value.into())],
        }
    }

    /// Returns true if the message has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Every argument id referenced anywhere in this message, including
    /// inside select and plural branches.
    pub fn argument_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_argument_names(&mut names);
        names
    }

    fn collect_argument_names<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        for part in &self.parts {
            if let Some(arg_id) = part.arg_id() {
                names.insert(arg_id);
            }
            if let Some(categories) = part.categories() {
                for message in categories.values() {
                    message.collect_argument_names(names);
                }
            }
        }
    }
}

impl Part {
    /// The argument name or number this part reads, if any.
    ///
    /// `#` reads the argument of its enclosing plural, so it reports none.
    pub fn arg_id(&self) -> Option<&str> {
        match self {
            Part::PlainArg { arg_id }
            | Part::SimpleArg { arg_id, .. }
            | Part::SelectArg { arg_id, .. }
            | Part::PluralArg { arg_id, .. } => Some(arg_id),
            Part::Text(_) | Part::PluralValue => None,
        }
    }

    /// The branch messages of a select or plural argument.
    pub fn categories(&self) -> Option<&BTreeMap<String, Message>> {
        match self {
            Part::SelectArg { categories, .. } | Part::PluralArg { categories, .. } => {
                Some(categories)
            }
            Part::Text(_) | Part::PlainArg { .. } | Part::SimpleArg { .. } | Part::PluralValue => {
                None
            }
        }
    }
}

/// The type of a simple argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgType {
    Default,
    Date,
    Duration,
    Number,
    Ordinal,
    Spellout,
    Time,
    /// Sentinel for an unknown keyword.
    Invalid,
}

impl ArgType {
    /// Look up a type keyword, returning [`ArgType::Invalid`] if unknown.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "date" => ArgType::Date,
            "duration" => ArgType::Duration,
            "number" => ArgType::Number,
            "ordinal" => ArgType::Ordinal,
            "spellout" => ArgType::Spellout,
            "time" => ArgType::Time,
            _ => ArgType::Invalid,
        }
    }

    /// The keyword spelling, or `""` for non-keyword entries.
    pub fn to_keyword(self) -> &'static str {
        match self {
            ArgType::Date => "date",
            ArgType::Duration => "duration",
            ArgType::Number => "number",
            ArgType::Ordinal => "ordinal",
            ArgType::Spellout => "spellout",
            ArgType::Time => "time",
            ArgType::Default | ArgType::Invalid => "",
        }
    }
}

/// The style of a simple argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgStyle {
    Default,
    Currency,
    Full,
    Integer,
    Long,
    Medium,
    Percent,
    Short,
    // Non-keyword styles.
    Text,
    Skeleton,
    /// Sentinel for an unknown keyword.
    Invalid,
}

impl ArgStyle {
    /// Look up a style keyword, returning [`ArgStyle::Invalid`] if unknown.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "currency" => ArgStyle::Currency,
            "full" => ArgStyle::Full,
            "integer" => ArgStyle::Integer,
            "long" => ArgStyle::Long,
            "medium" => ArgStyle::Medium,
            "percent" => ArgStyle::Percent,
            "short" => ArgStyle::Short,
            _ => ArgStyle::Invalid,
        }
    }

    /// The keyword spelling, or `""` for non-keyword entries.
    pub fn to_keyword(self) -> &'static str {
        match self {
            ArgStyle::Currency => "currency",
            ArgStyle::Full => "full",
            ArgStyle::Integer => "integer",
            ArgStyle::Long => "long",
            ArgStyle::Medium => "medium",
            ArgStyle::Percent => "percent",
            ArgStyle::Short => "short",
            ArgStyle::Default | ArgStyle::Text | ArgStyle::Skeleton | ArgStyle::Invalid => "",
        }
    }
}
