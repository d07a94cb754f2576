//! Renders a [`Message`] back into pattern syntax.
//!
//! Literal text is re-quoted so that parsing the printed pattern yields the
//! same tree. Hand-built trees that the parser could never produce (adjacent
//! text parts, non-keyword types or styles, keys that are not identifiers)
//! print on a best-effort basis.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use messageformat_syntax::{
    OFFSET_KEYWORD, PLURAL_KEYWORD, SELECT_KEYWORD, SELECT_ORDINAL_KEYWORD, needs_quoting,
};

use super::ast::{ArgStyle, ArgType, Message, Part};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_message(f, self, false)
    }
}

fn write_message(f: &mut Formatter<'_>, message: &Message, in_plural: bool) -> fmt::Result {
    for part in &message.parts {
        match part {
            Part::Text(text) => write_text(f, text, in_plural)?,
            Part::PlainArg { arg_id } => write!(f, "{{{arg_id}}}")?,
            Part::SimpleArg {
                arg_id,
                arg_type,
                arg_style,
            } => write_simple(f, arg_id, *arg_type, *arg_style)?,
            Part::SelectArg { arg_id, categories } => {
                write!(f, "{{{arg_id}, {SELECT_KEYWORD},")?;
                write_categories(f, categories, false)?;
                f.write_str("}")?;
            }
            Part::PluralArg {
                arg_id,
                ordinal,
                offset,
                categories,
            } => {
                let keyword = if *ordinal {
                    SELECT_ORDINAL_KEYWORD
                } else {
                    PLURAL_KEYWORD
                };
                write!(f, "{{{arg_id}, {keyword},")?;
                if *offset != 0 {
                    write!(f, " {OFFSET_KEYWORD}:{offset}")?;
                }
                write_categories(f, categories, true)?;
                f.write_str("}")?;
            }
            Part::PluralValue => f.write_str("#")?,
        }
    }
    Ok(())
}

fn write_simple(
    f: &mut Formatter<'_>,
    arg_id: &str,
    arg_type: ArgType,
    arg_style: ArgStyle,
) -> fmt::Result {
    if arg_type == ArgType::Default {
        return write!(f, "{{{arg_id}}}");
    }
    write!(f, "{{{arg_id}, {}", arg_type.to_keyword())?;
    let style = arg_style.to_keyword();
    if !style.is_empty() {
        write!(f, ", {style}")?;
    }
    f.write_str("}")
}

fn write_categories(
    f: &mut Formatter<'_>,
    categories: &BTreeMap<String, Message>,
    in_plural: bool,
) -> fmt::Result {
    for (key, message) in categories {
        write!(f, " {key}{{")?;
        write_message(f, message, in_plural)?;
        f.write_str("}")?;
    }
    Ok(())
}

/// Write literal text, doubling apostrophes and wrapping each run of syntax
/// characters in a single quoted span.
fn write_text(f: &mut Formatter<'_>, text: &str, in_plural: bool) -> fmt::Result {
    let mut quoted = false;
    for c in text.chars() {
        if c == '\'' {
            f.write_str("''")?;
        } else if needs_quoting(c, in_plural) {
            if !quoted {
                f.write_str("'")?;
                quoted = true;
            }
            write!(f, "{c}")?;
        } else {
            if quoted {
                f.write_str("'")?;
                quoted = false;
            }
            write!(f, "{c}")?;
        }
    }
    if quoted {
        f.write_str("'")?;
    }
    Ok(())
}
