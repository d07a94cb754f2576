//! Integration tests for pattern parsing.

use std::collections::BTreeMap;

use messageformat::parser::{ArgStyle, ArgType, Message, ParseError, Part, Position, parse};
use messageformat_syntax::{STYLE_KEYWORDS, TYPE_KEYWORDS};

fn text(value: &str) -> Part {
    Part::Text(value.to_string())
}

fn plain(arg_id: &str) -> Part {
    Part::PlainArg {
        arg_id: arg_id.to_string(),
    }
}

fn categories(entries: Vec<(&str, Vec<Part>)>) -> BTreeMap<String, Message> {
    entries
        .into_iter()
        .map(|(key, parts)| (key.to_string(), Message::new(parts)))
        .collect()
}

fn unexpected_token(pattern: &str) -> String {
    match parse(pattern) {
        Err(ParseError::UnexpectedToken { found, .. }) => found,
        other => panic!("expected UnexpectedToken for {pattern:?}, got {other:?}"),
    }
}

// =============================================================================
// Literal text and quoting
// =============================================================================

#[test]
fn test_pure_literal() {
    assert_eq!(parse("Spoon!").unwrap().parts, vec![text("Spoon!")]);
    assert_eq!(parse("Olá mundo!").unwrap().parts, vec![text("Olá mundo!")]);
}

#[test]
fn test_empty_pattern() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_lone_apostrophe_is_literal() {
    let m = parse("It's peanut butter jelly time!").unwrap();
    assert_eq!(m.parts, vec![text("It's peanut butter jelly time!")]);
}

#[test]
fn test_doubled_apostrophe_outside_quote() {
    let m = parse("It''s peanut butter jelly time!").unwrap();
    assert_eq!(m.parts, vec![text("It's peanut butter jelly time!")]);
}

#[test]
fn test_quoted_braces() {
    assert_eq!(parse("-'{foo}'-").unwrap().parts, vec![text("-{foo}-")]);
}

#[test]
fn test_mixed_quoting() {
    let m = parse("'-'''{-''-}'''-'").unwrap();
    assert_eq!(m.parts, vec![text("'-'{-'-}'-'")]);
}

#[test]
fn test_trailing_apostrophe_is_literal() {
    assert_eq!(parse("rock 'n' roll'").unwrap().parts, vec![text("rock 'n' roll'")]);
}

#[test]
fn test_unterminated_quote_runs_to_end() {
    assert_eq!(parse("a'{b c").unwrap().parts, vec![text("a{b c")]);
}

#[test]
fn test_top_level_close_brace_and_hash_are_literal() {
    assert_eq!(parse("a}b # c").unwrap().parts, vec![text("a}b # c")]);
    assert_eq!(parse("'}'").unwrap().parts, vec![text("}")]);
}

#[test]
fn test_hash_is_not_quotable_outside_plural() {
    assert_eq!(parse("'#'").unwrap().parts, vec![text("'#'")]);
}

#[test]
fn test_white_space_inside_text_is_kept() {
    assert_eq!(
        parse(" a\tb\n{x} ").unwrap().parts,
        vec![text(" a\tb\n"), plain("x"), text(" ")]
    );
}

// =============================================================================
// Plain and simple arguments
// =============================================================================

#[test]
fn test_plain_argument() {
    let m = parse("Hello, {audience}!").unwrap();
    assert_eq!(m.parts, vec![text("Hello, "), plain("audience"), text("!")]);
}

#[test]
fn test_plain_argument_with_white_space() {
    let m = parse("{ greeting }, World!").unwrap();
    assert_eq!(m.parts, vec![plain("greeting"), text(", World!")]);
}

#[test]
fn test_numbered_argument() {
    assert_eq!(parse("{0}{1}").unwrap().parts, vec![plain("0"), plain("1")]);
}

#[test]
fn test_numbered_argument_rejects_leading_zero() {
    assert_eq!(
        parse("{01}").unwrap_err(),
        ParseError::UnexpectedToken {
            found: "01".into(),
            position: Position {
                line: 1,
                byte_column: 2,
                char_column: 2
            },
            suggestions: vec![],
        }
    );
    assert_eq!(unexpected_token("{ 007, number}"), "007");
    assert_eq!(parse("{0}{10}").unwrap().parts, vec![plain("0"), plain("10")]);
    // Names merely starting with a zero are not numbers.
    assert_eq!(parse("{0x}").unwrap().parts, vec![plain("0x")]);
}

#[test]
fn test_unicode_argument_name() {
    assert_eq!(parse("{имя}").unwrap().parts, vec![plain("имя")]);
}

#[test]
fn test_simple_argument_without_style() {
    let m = parse("{n, number}").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::SimpleArg {
            arg_id: "n".into(),
            arg_type: ArgType::Number,
            arg_style: ArgStyle::Default,
        }]
    );
}

#[test]
fn test_simple_argument_with_style() {
    let m = parse("{ when , date , short }").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::SimpleArg {
            arg_id: "when".into(),
            arg_type: ArgType::Date,
            arg_style: ArgStyle::Short,
        }]
    );

    let m = parse("{ratio,number,percent}").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::SimpleArg {
            arg_id: "ratio".into(),
            arg_type: ArgType::Number,
            arg_style: ArgStyle::Percent,
        }]
    );
}

#[test]
fn test_every_type_keyword() {
    for (keyword, expected) in [
        ("date", ArgType::Date),
        ("duration", ArgType::Duration),
        ("number", ArgType::Number),
        ("ordinal", ArgType::Ordinal),
        ("spellout", ArgType::Spellout),
        ("time", ArgType::Time),
    ] {
        let m = parse(&format!("{{x, {keyword}}}")).unwrap();
        match &m.parts[0] {
            Part::SimpleArg { arg_type, .. } => assert_eq!(*arg_type, expected),
            other => panic!("expected simple argument, got {other:?}"),
        }
    }
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select() {
    let m = parse("{timespan, select, morning{Good morning} other{Hello}}").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::SelectArg {
            arg_id: "timespan".into(),
            categories: categories(vec![
                ("morning", vec![text("Good morning")]),
                ("other", vec![text("Hello")]),
            ]),
        }]
    );
}

#[test]
fn test_select_without_other_parses() {
    let m = parse("{g,select,male{he}female{she}}").unwrap();
    assert_eq!(m.parts[0].categories().map(BTreeMap::len), Some(2));
}

#[test]
fn test_select_branch_with_arguments_and_empty_branch() {
    let m = parse("{g, select, x{Hi, {name}.} other{}}").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::SelectArg {
            arg_id: "g".into(),
            categories: categories(vec![
                ("x", vec![text("Hi, "), plain("name"), text(".")]),
                ("other", vec![]),
            ]),
        }]
    );
}

#[test]
fn test_hash_in_select_branch_is_text() {
    let m = parse("{g, select, other{#1}}").unwrap();
    assert_eq!(
        m.parts[0].categories().unwrap()["other"].parts,
        vec![text("#1")]
    );
}

// =============================================================================
// Plural
// =============================================================================

#[test]
fn test_plural_with_value_marker() {
    let m = parse("{n, plural, one{1 item} other{# items}}").unwrap();
    assert_eq!(
        m.parts,
        vec![Part::PluralArg {
            arg_id: "n".into(),
            ordinal: false,
            offset: 0,
            categories: categories(vec![
                ("one", vec![text("1 item")]),
                ("other", vec![Part::PluralValue, text(" items")]),
            ]),
        }]
    );
}

#[test]
fn test_plural_exact_keys_and_offset() {
    let m = parse("{n, plural, offset: 1 =0{none} =-1{odd} one{#} other{# more}}").unwrap();
    match &m.parts[0] {
        Part::PluralArg {
            offset, categories, ..
        } => {
            assert_eq!(*offset, 1);
            let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["=-1", "=0", "one", "other"]);
            assert_eq!(categories["one"].parts, vec![Part::PluralValue]);
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_plural_exact_keys_are_normalized() {
    let m = parse("{n, plural, =007{bond} other{x}}").unwrap();
    assert!(m.parts[0].categories().unwrap().contains_key("=7"));
}

#[test]
fn test_selectordinal() {
    let m = parse("{n, selectordinal, one{#st} two{#nd} few{#rd} other{#th}}").unwrap();
    match &m.parts[0] {
        Part::PluralArg {
            ordinal, categories, ..
        } => {
            assert!(*ordinal);
            assert_eq!(categories.len(), 4);
            assert_eq!(categories["two"].parts, vec![Part::PluralValue, text("nd")]);
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_plural_without_other_parses() {
    // Rejected by the compiler, not the parser.
    assert!(parse("{n, plural, one{x}}").is_ok());
}

#[test]
fn test_offset_word_without_colon_is_a_key() {
    let m = parse("{n, plural, offset{x} other{y}}").unwrap();
    match &m.parts[0] {
        Part::PluralArg {
            offset, categories, ..
        } => {
            assert_eq!(*offset, 0);
            assert!(categories.contains_key("offset"));
        }
        other => panic!("expected plural, got {other:?}"),
    }
}

#[test]
fn test_quoted_hash_in_plural() {
    let m = parse("{n, plural, other{'#' is #}}").unwrap();
    assert_eq!(
        m.parts[0].categories().unwrap()["other"].parts,
        vec![text("# is "), Part::PluralValue]
    );
}

#[test]
fn test_nested_select_in_plural_does_not_see_hash() {
    let m = parse("{n, plural, other{{g, select, x{#} other{# #}}}}").unwrap();
    let plural_branch = &m.parts[0].categories().unwrap()["other"];
    let select_branches = plural_branch.parts[0].categories().unwrap();
    assert_eq!(select_branches["x"].parts, vec![text("#")]);
    assert_eq!(select_branches["other"].parts, vec![text("# #")]);
}

#[test]
fn test_nested_plural_in_plural() {
    let m = parse("{a, plural, other{# {b, plural, other{#}}}}").unwrap();
    let outer = &m.parts[0].categories().unwrap()["other"];
    assert_eq!(outer.parts[0], Part::PluralValue);
    assert_eq!(outer.parts[1], text(" "));
    let inner = outer.parts[2].categories().unwrap();
    assert_eq!(inner["other"].parts, vec![Part::PluralValue]);
}

#[test]
fn test_inbox_messages() {
    for pattern in [
        "There {n, plural, one{is 1 item} other{are # items}} in your inbox.",
        "{n, plural, one{Existe 1 item} other{Existem # itens}} na sua caixa de entrada.",
    ] {
        assert_eq!(parse(pattern).unwrap().argument_names().len(), 1);
    }
}

#[test]
fn test_argument_names_cover_nested_branches() {
    let m = parse("{a} {b, select, x{{c}} other{{d, plural, other{{e, number}}}}}").unwrap();
    let names: Vec<&str> = m.argument_names().into_iter().collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_unclosed_argument_is_eof() {
    assert_eq!(
        parse("{"),
        Err(ParseError::UnexpectedEof {
            position: Position {
                line: 1,
                byte_column: 2,
                char_column: 2
            }
        })
    );
    assert!(matches!(parse("{a"), Err(ParseError::UnexpectedEof { .. })));
    assert!(matches!(
        parse("{a, select, x{y}"),
        Err(ParseError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        parse("{a, select, x{unterminated"),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_unterminated_quote_in_branch_is_eof() {
    assert!(matches!(
        parse("{a, plural, other{'{}}"),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_malformed_delimiters() {
    assert_eq!(unexpected_token("{}"), "}");
    assert_eq!(unexpected_token("{a b}"), "b");
    assert_eq!(unexpected_token("x{a,}"), "}");
    assert_eq!(unexpected_token("{a, number x}"), "x");
    assert_eq!(unexpected_token("{a, number, short x}"), "x");
}

#[test]
fn test_keyword_lookups_match_shared_tables() {
    for &keyword in TYPE_KEYWORDS {
        let arg_type = ArgType::from_keyword(keyword);
        assert_ne!(arg_type, ArgType::Invalid, "{keyword}");
        assert_eq!(arg_type.to_keyword(), keyword);
    }
    for &keyword in STYLE_KEYWORDS {
        let arg_style = ArgStyle::from_keyword(keyword);
        assert_ne!(arg_style, ArgStyle::Invalid, "{keyword}");
        assert_eq!(arg_style.to_keyword(), keyword);
    }

    let type_keywords: Vec<&str> = [
        ArgType::Default,
        ArgType::Date,
        ArgType::Duration,
        ArgType::Number,
        ArgType::Ordinal,
        ArgType::Spellout,
        ArgType::Time,
        ArgType::Invalid,
    ]
    .into_iter()
    .map(ArgType::to_keyword)
    .filter(|keyword| !keyword.is_empty())
    .collect();
    assert_eq!(type_keywords, TYPE_KEYWORDS);

    let style_keywords: Vec<&str> = [
        ArgStyle::Default,
        ArgStyle::Currency,
        ArgStyle::Full,
        ArgStyle::Integer,
        ArgStyle::Long,
        ArgStyle::Medium,
        ArgStyle::Percent,
        ArgStyle::Short,
        ArgStyle::Text,
        ArgStyle::Skeleton,
        ArgStyle::Invalid,
    ]
    .into_iter()
    .map(ArgStyle::to_keyword)
    .filter(|keyword| !keyword.is_empty())
    .collect();
    assert_eq!(style_keywords, STYLE_KEYWORDS);
}

#[test]
fn test_unknown_keywords() {
    assert_eq!(unexpected_token("{a, nope}"), "nope");
    assert_eq!(unexpected_token("{a, number, huge}"), "huge");
    assert_eq!(unexpected_token("{a, number, ::currency/EUR}"), ":");
}

#[test]
fn test_unknown_keyword_position_and_suggestions() {
    match parse("{a, numbr}") {
        Err(ParseError::UnexpectedToken {
            found,
            position,
            suggestions,
        }) => {
            assert_eq!(found, "numbr");
            assert_eq!(position.char_column, 5);
            assert_eq!(suggestions, vec!["number".to_string()]);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn test_malformed_select() {
    assert_eq!(unexpected_token("{a, select}"), "}");
    assert_eq!(unexpected_token("{a, select,}"), "}");
    assert_eq!(unexpected_token("{a, select, x}"), "}");
    assert_eq!(unexpected_token("{a, select, x{} x{}}"), "x");
}

#[test]
fn test_malformed_plural() {
    assert_eq!(unexpected_token("{a, plural, one{x} one{y} other{z}}"), "one");
    assert_eq!(unexpected_token("{a, plural, =x{y} other{z}}"), "x");
    assert_eq!(unexpected_token("{a, plural, = 1{y} other{z}}"), " ");
    assert_eq!(unexpected_token("{a, plural, offset:x other{}}"), "x");
    assert_eq!(
        unexpected_token("{a, plural, =99999999999999999999{y} other{z}}"),
        "99999999999999999999"
    );
    assert_eq!(unexpected_token("{a, plural,}"), "}");
}

#[test]
fn test_offset_after_category_is_a_key_error() {
    // Once a category has been read, `offset` is an ordinary key and `:` is
    // not a valid branch opener.
    assert_eq!(unexpected_token("{a, plural, other{x} offset:1}"), ":");
}

#[test]
fn test_error_positions_count_lines() {
    let err = parse("line one\n{a, select, x{}\n  y}").unwrap_err();
    assert_eq!(
        err.position(),
        Some(Position {
            line: 3,
            byte_column: 4,
            char_column: 4
        })
    );
}
