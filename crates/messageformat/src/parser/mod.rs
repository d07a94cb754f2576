//! MessageFormat pattern parser.
//!
//! This module turns pattern strings into an AST that can be compiled,
//! inspected by external tooling, or printed back into pattern syntax.

pub mod ast;
mod decoder;
pub mod error;
mod pattern;
mod print;

pub use ast::*;
pub use decoder::{Decoder, Position};
pub use error::{ParseError, compute_suggestions};
pub use pattern::{parse, parse_with_options};
