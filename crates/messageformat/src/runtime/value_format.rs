//! Rendering of typed `{x, type, style}` arguments.

use icu_locale_core::Locale;

use super::error::FormatError;
use crate::parser::{ArgStyle, ArgType};
use crate::types::{Value, ValueKind};

/// A simple argument about to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct SimpleArgument<'a> {
    pub locale: &'a Locale,
    pub arg_id: &'a str,
    pub arg_type: ArgType,
    pub arg_style: ArgStyle,
    pub value: &'a Value,
}

/// Renders simple arguments. Hosts with locale-aware number and date
/// formatting plug it in here.
pub trait ValueFormatter {
    fn format_value(
        &self,
        argument: &SimpleArgument<'_>,
        out: &mut String,
    ) -> Result<(), FormatError>;
}

/// Locale-insensitive fallback: numbers in plain base 10, strings only for
/// untyped arguments. Style is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainValueFormatter;

impl ValueFormatter for PlainValueFormatter {
    fn format_value(
        &self,
        argument: &SimpleArgument<'_>,
        out: &mut String,
    ) -> Result<(), FormatError> {
        match (argument.arg_type, argument.value) {
            (_, Value::Integer(n)) => out.push_str(&n.to_string()),
            (ArgType::Default | ArgType::Number | ArgType::Duration, Value::Float(x)) => {
                out.push_str(&x.to_string());
            }
            (ArgType::Default, Value::String(s)) => out.push_str(s),
            (_, value) => {
                return Err(FormatError::ArgumentTypeMismatch {
                    name: argument.arg_id.to_string(),
                    expected: ValueKind::Integer,
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }
}
