//! Runtime formatting of compiled messages.
//!
//! This module walks a [`CompiledMessage`](crate::CompiledMessage) against a
//! caller-supplied argument map, dispatching select and plural branches and
//! substituting values. Plural categories and typed argument rendering come
//! from injected collaborators.

mod error;
mod format;
mod plural;
mod value_format;

pub use error::FormatError;
pub use format::Collaborators;
pub use plural::{CldrPluralResolver, PluralResolver, category_keyword};
pub use value_format::{PlainValueFormatter, SimpleArgument, ValueFormatter};
