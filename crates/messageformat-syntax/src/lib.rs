//! Shared MessageFormat syntax tables used by both the parser and the pattern
//! printer.
//!
//! This crate centralizes the character classes and keyword spellings of the
//! pattern grammar so that reading and writing patterns cannot drift apart.

/// Keyword introducing a select argument: `{x, select, ...}`.
pub const SELECT_KEYWORD: &str = "select";

/// Keyword introducing a cardinal plural argument: `{n, plural, ...}`.
pub const PLURAL_KEYWORD: &str = "plural";

/// Keyword introducing an ordinal plural argument: `{n, selectordinal, ...}`.
pub const SELECT_ORDINAL_KEYWORD: &str = "selectordinal";

/// Prefix of the optional plural offset: `offset:1`.
pub const OFFSET_KEYWORD: &str = "offset";

/// Category every plural argument must define.
pub const OTHER_CATEGORY: &str = "other";

/// Type keywords accepted in `{x, <type>}` and `{x, <type>, <style>}`.
pub const TYPE_KEYWORDS: &[&str] = &[
    "date", "duration", "number", "ordinal", "spellout", "time",
];

/// Style keywords accepted in `{x, <type>, <style>}`.
pub const STYLE_KEYWORDS: &[&str] = &[
    "currency", "full", "integer", "long", "medium", "percent", "short",
];

/// CLDR plural category keywords.
pub const PLURAL_CATEGORY_KEYWORDS: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Every keyword that may follow the argument id, in the order the parser
/// tries them.
pub fn accepted_argument_keywords() -> impl Iterator<Item = &'static str> {
    [SELECT_KEYWORD, PLURAL_KEYWORD, SELECT_ORDINAL_KEYWORD]
        .into_iter()
        .chain(TYPE_KEYWORDS.iter().copied())
}

/// Returns true for a CLDR plural category keyword.
pub fn is_plural_category(keyword: &str) -> bool {
    PLURAL_CATEGORY_KEYWORDS.contains(&keyword)
}

/// Unicode `Pattern_White_Space`.
///
/// Skippable between tokens inside `{...}`, never inside literal text.
pub fn is_pattern_white_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}' | '\u{0020}' | '\u{0085}' | '\u{200E}' | '\u{200F}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Unicode `Pattern_Syntax`.
pub fn is_pattern_syntax(c: char) -> bool {
    matches!(
        c,
        '\u{0021}'..='\u{002F}'
            | '\u{003A}'..='\u{0040}'
            | '\u{005B}'..='\u{005E}'
            | '\u{0060}'
            | '\u{007B}'..='\u{007E}'
            | '\u{00A1}'..='\u{00A7}'
            | '\u{00A9}'
            | '\u{00AB}'
            | '\u{00AC}'
            | '\u{00AE}'
            | '\u{00B0}'
            | '\u{00B1}'
            | '\u{00B6}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{00D7}'
            | '\u{00F7}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{203E}'
            | '\u{2041}'..='\u{2053}'
            | '\u{2055}'..='\u{205E}'
            | '\u{2190}'..='\u{245F}'
            | '\u{2500}'..='\u{2775}'
            | '\u{2794}'..='\u{2BFF}'
            | '\u{2E00}'..='\u{2E7F}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3020}'
            | '\u{3030}'
            | '\u{FD3E}'
            | '\u{FD3F}'
            | '\u{FE45}'
            | '\u{FE46}'
    )
}

/// Returns true if `c` may appear in an argument id or keyword.
///
/// Identifiers end at the first `Pattern_White_Space` or `Pattern_Syntax`
/// code point.
pub fn is_identifier_char(c: char) -> bool {
    !is_pattern_white_space(c) && !is_pattern_syntax(c)
}

/// Returns true if an apostrophe immediately before `c` opens a quoted span.
///
/// `#` is only quotable inside a plural branch, where it is otherwise the
/// plural value marker.
pub fn needs_quoting(c: char, in_plural: bool) -> bool {
    match c {
        '{' | '}' => true,
        '#' => in_plural,
        _ => false,
    }
}
