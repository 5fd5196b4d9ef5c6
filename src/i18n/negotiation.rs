//! Locale negotiation from the `locale` cookie and the `Accept-Language` header.
//!
//! Negotiation is total: every input, however malformed, resolves to one of
//! the supported locales. Unusable preferences are treated as absent.

use crate::i18n::Locale;
use serde::Serialize;
use std::cmp::Ordering;

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
    /// Primary subtag, lowercased (e.g., "en" for "en-US")
    pub primary: String,

    /// Quality weight in `[0.0, 1.0]`
    pub weight: f32,
}

/// Where a negotiated locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceSource {
    Cookie,
    Header,
    Fallback,
}

/// Result of negotiation, with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negotiated {
    pub locale: Locale,
    pub source: PreferenceSource,
}

/// Resolve the locale for a request, falling back to the registry default.
///
/// The cookie wins when it holds a supported code; otherwise the highest
/// weighted supported language from the header is used.
pub fn resolve_locale(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    resolve_locale_or(cookie, accept_language, Locale::default())
}

/// Same as [`resolve_locale`] with an explicit fallback locale.
pub fn resolve_locale_or(
    cookie: Option<&str>,
    accept_language: Option<&str>,
    fallback: Locale,
) -> Locale {
    negotiate(cookie, accept_language, fallback).locale
}

/// Negotiate a locale and report which signal decided it.
pub fn negotiate(
    cookie: Option<&str>,
    accept_language: Option<&str>,
    fallback: Locale,
) -> Negotiated {
    if let Some(locale) = cookie.and_then(Locale::parse) {
        return Negotiated {
            locale,
            source: PreferenceSource::Cookie,
        };
    }

    if let Some(locale) = accept_language.and_then(best_supported) {
        return Negotiated {
            locale,
            source: PreferenceSource::Header,
        };
    }

    Negotiated {
        locale: fallback,
        source: PreferenceSource::Fallback,
    }
}

/// First supported locale in weight order, if any.
fn best_supported(header: &str) -> Option<Locale> {
    parse_accept_language(header)
        .iter()
        .find_map(|pref| Locale::from_primary_subtag(&pref.primary))
}

/// Parse an `Accept-Language` header into preferences sorted by weight.
///
/// Tokens look like `tag[;q=weight]`. The sort is stable, so entries with
/// equal weight keep their header order. Malformed weights count as 1.0,
/// `q=0` entries are dropped, and wildcards are skipped.
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
    let mut preferences: Vec<LanguagePreference> = header
        .split(',')
        .filter_map(parse_token)
        .collect();

    // `Vec::sort_by` is stable.
    preferences.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    preferences
}

fn parse_token(token: &str) -> Option<LanguagePreference> {
    let mut parts = token.split(';');
    let tag = parts.next()?.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }

    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or(tag)
        .trim()
        .to_ascii_lowercase();
    if primary.is_empty() {
        return None;
    }

    let weight = parts
        .filter_map(|param| {
            let (key, value) = param.split_once('=')?;
            key.trim().eq_ignore_ascii_case("q").then(|| parse_weight(value))
        })
        .next()
        .unwrap_or(1.0);

    if weight <= 0.0 {
        return None;
    }

    Some(LanguagePreference { primary, weight })
}

fn parse_weight(value: &str) -> f32 {
    match value.trim().parse::<f32>() {
        Ok(weight) if weight.is_finite() => weight.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Cookie Precedence Tests ====================

    #[test]
    fn test_cookie_wins_over_header() {
        assert_eq!(resolve_locale(Some("en"), Some("id;q=1.0")), Locale::En);
        assert_eq!(resolve_locale(Some("id"), Some("en")), Locale::Id);
    }

    #[test]
    fn test_unsupported_cookie_is_ignored() {
        assert_eq!(resolve_locale(Some("fr"), Some("en")), Locale::En);
        assert_eq!(resolve_locale(Some("EN"), None), Locale::Id);
        assert_eq!(resolve_locale(Some(""), Some("en-GB")), Locale::En);
    }

    // ==================== Header Weight Tests ====================

    #[test]
    fn test_header_respects_weights() {
        assert_eq!(
            resolve_locale(None, Some("fr;q=0.5, en;q=0.9, id;q=0.9")),
            Locale::En
        );
        assert_eq!(resolve_locale(None, Some("en;q=0.4, id;q=0.8")), Locale::Id);
    }

    #[test]
    fn test_header_equal_weights_keep_header_order() {
        assert_eq!(resolve_locale(None, Some("id, en")), Locale::Id);
        assert_eq!(resolve_locale(None, Some("en, id")), Locale::En);
    }

    #[test]
    fn test_header_region_suffix_is_stripped() {
        assert_eq!(resolve_locale(None, Some("en-US,en;q=0.9")), Locale::En);
        assert_eq!(resolve_locale(None, Some("id-ID")), Locale::Id);
        assert_eq!(resolve_locale(None, Some("en_GB")), Locale::En);
    }

    #[test]
    fn test_header_unsupported_languages_fall_back() {
        assert_eq!(resolve_locale(None, Some("fr-FR, de;q=0.8")), Locale::Id);
    }

    #[test]
    fn test_header_is_case_insensitive() {
        assert_eq!(resolve_locale(None, Some("EN-us")), Locale::En);
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_no_signal_falls_back_to_default() {
        assert_eq!(resolve_locale(None, None), Locale::Id);
        assert_eq!(resolve_locale(None, Some("")), Locale::Id);
    }

    #[test]
    fn test_explicit_fallback() {
        assert_eq!(resolve_locale_or(None, None, Locale::En), Locale::En);
        assert_eq!(resolve_locale_or(None, Some("id"), Locale::En), Locale::Id);
    }

    // ==================== Malformed Input Tests ====================

    #[test]
    fn test_malformed_weight_counts_as_one() {
        let prefs = parse_accept_language("en;q=abc, id;q=0.5");
        assert_eq!(prefs[0].primary, "en");
        assert_eq!(prefs[0].weight, 1.0);
        assert_eq!(resolve_locale(None, Some("id;q=0.5, en;q=oops")), Locale::En);
    }

    #[test]
    fn test_zero_weight_is_not_acceptable() {
        assert_eq!(resolve_locale(None, Some("en;q=0, fr")), Locale::Id);
        assert!(parse_accept_language("en;q=0.0").is_empty());
    }

    #[test]
    fn test_out_of_range_weights_are_clamped() {
        let prefs = parse_accept_language("en;q=7, id;q=-3");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].weight, 1.0);
    }

    #[test]
    fn test_wildcard_and_empty_tokens_skipped() {
        let prefs = parse_accept_language(" , *, ;q=0.5,,en");
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs[0].primary, "en");
    }

    #[test]
    fn test_nan_weight_counts_as_one() {
        let prefs = parse_accept_language("en;q=NaN");
        assert_eq!(prefs[0].weight, 1.0);
    }

    #[test]
    fn test_extra_parameters_tolerated() {
        let prefs = parse_accept_language("en;level=1;q=0.3, id");
        assert_eq!(prefs[0].primary, "id");
        assert_eq!(prefs[1].primary, "en");
        assert!((prefs[1].weight - 0.3).abs() < f32::EPSILON);
    }

    // ==================== Provenance Tests ====================

    #[test]
    fn test_negotiate_reports_source() {
        assert_eq!(
            negotiate(Some("en"), None, Locale::Id).source,
            PreferenceSource::Cookie
        );
        assert_eq!(
            negotiate(None, Some("en"), Locale::Id).source,
            PreferenceSource::Header
        );
        assert_eq!(
            negotiate(Some("xx"), Some("fr"), Locale::Id).source,
            PreferenceSource::Fallback
        );
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_resolve_is_total(cookie in proptest::option::of(".*"), header in proptest::option::of(".*")) {
            let locale = resolve_locale(cookie.as_deref(), header.as_deref());
            prop_assert!(Locale::ALL.contains(&locale));
        }

        #[test]
        fn prop_valid_cookie_always_wins(use_en in any::<bool>(), header in ".*") {
            let code = if use_en { "en" } else { "id" };
            let locale = resolve_locale(Some(code), Some(&header));
            prop_assert_eq!(locale.code(), code);
        }

        #[test]
        fn prop_parsed_weights_are_sorted(header in "[a-zA-Z;=.,0-9 -]{0,64}") {
            let prefs = parse_accept_language(&header);
            for pair in prefs.windows(2) {
                prop_assert!(pair[0].weight >= pair[1].weight);
            }
        }
    }
}
