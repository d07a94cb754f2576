//! Locale-bound compilation of parsed messages.
//!
//! Compilation happens once per (message, locale) pair and produces an
//! immutable [`CompiledMessage`] that the runtime formats against arguments.

mod compile;
mod error;
pub(crate) mod tree;

pub use compile::{compile, compile_for_locale, compile_with_options};
pub use error::CompileError;
pub use tree::CompiledMessage;
