//! CLDR plural category resolution.
//!
//! Plural rules differ per language: English has "one" and "other", Russian
//! has "one", "few", "many", and "other", and Arabic uses all six categories.
//! Ordinal rules (`selectordinal`) are a separate table: English ordinals
//! distinguish "one" (1st), "two" (2nd), "few" (3rd), and "other" (4th).
//!
//! The formatter consults a [`PluralResolver`] on every plural dispatch; the
//! default [`CldrPluralResolver`] caches `PluralRules` per thread per
//! (language identifier, rule type).

use std::cell::RefCell;

use icu_locale_core::{LanguageIdentifier, Locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Maps an integer operand to a CLDR plural category for a locale.
///
/// Implementations are looked up read-only at format time; a resolver shared
/// between threads must tolerate concurrent calls.
pub trait PluralResolver {
    fn resolve_category(&self, locale: &Locale, n: i64, ordinal: bool) -> PluralCategory;
}

/// Resolver backed by the CLDR data compiled into `icu_plurals`.
///
/// # Examples
///
/// ```
/// use messageformat::{CldrPluralResolver, Locale, PluralCategory, PluralResolver};
///
/// let en: Locale = "en".parse().unwrap();
/// assert_eq!(CldrPluralResolver.resolve_category(&en, 1, false), PluralCategory::One);
/// assert_eq!(CldrPluralResolver.resolve_category(&en, 0, false), PluralCategory::Other);
/// assert_eq!(CldrPluralResolver.resolve_category(&en, 3, true), PluralCategory::Few);
///
/// let ru: Locale = "ru".parse().unwrap();
/// assert_eq!(CldrPluralResolver.resolve_category(&ru, 2, false), PluralCategory::Few);
/// assert_eq!(CldrPluralResolver.resolve_category(&ru, 5, false), PluralCategory::Many);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrPluralResolver;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language identifier and
    /// ordinal flag. Unicode extensions do not affect plural rules, so tags
    /// differing only in extensions share an entry.
    static PLURAL_RULES_CACHE: RefCell<Vec<(LanguageIdentifier, bool, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

impl PluralResolver for CldrPluralResolver {
    fn resolve_category(&self, locale: &Locale, n: i64, ordinal: bool) -> PluralCategory {
        let id = &locale.id;
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(cached, cached_ordinal, _)| cached == id && *cached_ordinal == ordinal)
            {
                return rules.category_for(n);
            }
            let rule_type = if ordinal {
                PluralRuleType::Ordinal
            } else {
                PluralRuleType::Cardinal
            };
            match PluralRules::try_new(Locale::from(id.clone()).into(), rule_type.into()) {
                Ok(rules) => {
                    let category = rules.category_for(n);
                    cache.push((id.clone(), ordinal, rules));
                    category
                }
                Err(error) => {
                    tracing::debug!(%locale, %error, "plural rules unavailable, using 'other'");
                    PluralCategory::Other
                }
            }
        })
    }
}

/// The keyword spelling of a plural category, as used for branch keys.
pub fn category_keyword(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
