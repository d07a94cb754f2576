//! ICU MessageFormat patterns: parse once, compile per locale, format many
//! times.
//!
//! ```
//! use messageformat::{args, compile, parse};
//!
//! let message = parse("There {n, plural, one{is # item} other{are # items}} in your inbox.")
//!     .unwrap();
//! let compiled = compile("en", &message).unwrap();
//!
//! assert_eq!(
//!     compiled.format(&args! { "n" => 1 }).unwrap(),
//!     "There is 1 item in your inbox."
//! );
//! assert_eq!(
//!     compiled.format(&args! { "n" => 5 }).unwrap(),
//!     "There are 5 items in your inbox."
//! );
//! ```

pub mod compiler;
mod options;
pub mod parser;
pub mod runtime;
pub mod types;

use std::collections::HashMap;

use thiserror::Error;

pub use compiler::{
    CompileError, CompiledMessage, compile, compile_for_locale, compile_with_options,
};
pub use icu_locale_core::Locale;
pub use icu_plurals::PluralCategory;
pub use options::{DEFAULT_MAX_DEPTH, Options};
pub use parser::{Message, ParseError, Part, parse, parse_with_options};
pub use runtime::{
    CldrPluralResolver, Collaborators, FormatError, PlainValueFormatter, PluralResolver,
    SimpleArgument, ValueFormatter,
};
pub use types::{Value, ValueKind};

/// Any error from the parse, compile, or format stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CompiledMessage {
    /// Parse and compile a pattern in one step.
    pub fn from_pattern(locale: &str, pattern: &str) -> Result<Self, Error> {
        let message = parse(pattern)?;
        Ok(compile(locale, &message)?)
    }
}

/// Parse, compile, and format a pattern in one step.
///
/// Prefer [`CompiledMessage::from_pattern`] when formatting the same pattern
/// more than once.
///
/// # Example
///
/// ```
/// use messageformat::{args, format};
///
/// let text = format("en", "Hello, {name}!", &args! { "name" => "World" }).unwrap();
/// assert_eq!(text, "Hello, World!");
/// ```
pub fn format(
    locale: &str,
    pattern: &str,
    arguments: &HashMap<String, Value>,
) -> Result<String, Error> {
    let compiled = CompiledMessage::from_pattern(locale, pattern)?;
    Ok(compiled.format(arguments)?)
}

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use messageformat::args;
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_integer(), Some(3));
/// assert_eq!(a["name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
