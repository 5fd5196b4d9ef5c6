//! Locale routing: decide whether a request passes through or is redirected
//! to a locale-prefixed URL.
//!
//! Per request the decision is one of:
//!
//! - excluded path (assets, API, infrastructure, anything dotted) → pass through untouched
//! - locale already in path → pass through, refreshing the cookie if it differs
//! - anything else → redirect to `/{locale}{path}` and set the cookie
//!
//! Nothing here can fail. The cookie makes subsequent requests take the
//! locale-in-path branch, so a client is redirected at most once.

use crate::i18n::negotiation::{negotiate, Negotiated};
use crate::i18n::Locale;

/// Name of the cookie that caches the visitor's locale.
pub const LOCALE_COOKIE: &str = "locale";

/// One year, in seconds.
pub const LOCALE_COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

/// Path prefixes that are never locale-prefixed.
const EXCLUDED_PREFIXES: [&str; 9] = [
    "/api",
    "/_next",
    "/.well-known",
    "/assets",
    "/static",
    "/favicon",
    "/robots.txt",
    "/sitemap",
    "/manifest",
];

/// Inbound request data the router needs. Owned by the server layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub locale_cookie: Option<&'a str>,
    pub accept_language: Option<&'a str>,
}

/// `Set-Cookie` instruction for the locale cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCookie {
    pub locale: Locale,
}

impl LocaleCookie {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Render as a `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        format!(
            "{}={}; Max-Age={}; Path=/; SameSite=Lax",
            LOCALE_COOKIE,
            self.locale.code(),
            LOCALE_COOKIE_MAX_AGE
        )
    }
}

/// Which branch let a request through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThroughReason {
    /// Asset, API or infrastructure path; never touches the cookie.
    Excluded,

    /// Path already starts with a supported locale.
    LocaleInPath,
}

/// What the server should do with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Serve the request as-is, optionally updating the locale cookie.
    PassThrough {
        reason: PassThroughReason,
        set_cookie: Option<LocaleCookie>,
    },

    /// Redirect to the locale-prefixed URL and store the chosen locale.
    Redirect {
        location: String,
        locale: Locale,
        cookie: LocaleCookie,
    },
}

impl RoutingDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, RoutingDecision::Redirect { .. })
    }

    /// Cookie to set alongside the response, if any.
    pub fn cookie(&self) -> Option<LocaleCookie> {
        match self {
            RoutingDecision::PassThrough { set_cookie, .. } => *set_cookie,
            RoutingDecision::Redirect { cookie, .. } => Some(*cookie),
        }
    }
}

/// Negotiate and route in one step.
///
/// Negotiation only matters on the redirect branch, but it is cheap and
/// pure, so it is always evaluated and returned for observability.
pub fn route_request(ctx: &RequestContext<'_>, fallback: Locale) -> (RoutingDecision, Negotiated) {
    let negotiated = negotiate(ctx.locale_cookie, ctx.accept_language, fallback);
    (decide_routing(ctx, negotiated.locale), negotiated)
}

/// Decide how to handle a request given the locale resolved for it.
pub fn decide_routing(ctx: &RequestContext<'_>, resolved: Locale) -> RoutingDecision {
    if is_excluded_path(ctx.path) {
        return RoutingDecision::PassThrough {
            reason: PassThroughReason::Excluded,
            set_cookie: None,
        };
    }

    if let Some(path_locale) = locale_from_path(ctx.path) {
        let set_cookie = (ctx.locale_cookie != Some(path_locale.code()))
            .then(|| LocaleCookie::new(path_locale));
        return RoutingDecision::PassThrough {
            reason: PassThroughReason::LocaleInPath,
            set_cookie,
        };
    }

    RoutingDecision::Redirect {
        location: localized_location(resolved, ctx.path, ctx.query),
        locale: resolved,
        cookie: LocaleCookie::new(resolved),
    }
}

/// The locale encoded in the first path segment (`/id`, `/en/...`), if any.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split('/').next().unwrap_or(rest);
    Locale::parse(segment)
}

/// Whether a path must never be locale-prefixed.
///
/// A dot in any segment excludes the path: file names, `/.well-known/*`
/// and versioned paths such as `/v1.2/about` are served as-is.
pub fn is_excluded_path(path: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}

fn localized_location(locale: Locale, path: &str, query: Option<&str>) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    // `/` maps to `/{locale}/`, matching the trailing-slash page URLs.
    let mut location = format!("/{}{}", locale.code(), path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }
    location
}

/// Extract the locale cookie value from one or more `Cookie` header values.
///
/// Returns the first `locale=` pair found. The value is returned verbatim;
/// whether it names a supported locale is negotiation's concern.
pub fn locale_cookie_value<'a, I>(cookie_headers: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    cookie_headers.into_iter().find_map(|header| {
        header.split(';').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name.trim() == LOCALE_COOKIE).then(|| value.trim().trim_matches('"'))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctx<'a>(path: &'a str, cookie: Option<&'a str>) -> RequestContext<'a> {
        RequestContext {
            path,
            locale_cookie: cookie,
            ..RequestContext::default()
        }
    }

    // ==================== Locale-in-Path Tests ====================

    #[test]
    fn test_locale_path_with_matching_cookie_passes_through() {
        let decision = decide_routing(&ctx("/en/about", Some("en")), Locale::En);
        assert_eq!(
            decision,
            RoutingDecision::PassThrough {
                reason: PassThroughReason::LocaleInPath,
                set_cookie: None
            }
        );
    }

    #[test]
    fn test_locale_path_with_different_cookie_refreshes_cookie() {
        let decision = decide_routing(&ctx("/en/", Some("id")), Locale::Id);
        assert_eq!(
            decision,
            RoutingDecision::PassThrough {
                reason: PassThroughReason::LocaleInPath,
                set_cookie: Some(LocaleCookie::new(Locale::En))
            }
        );
    }

    #[test]
    fn test_locale_path_without_cookie_sets_cookie() {
        let decision = decide_routing(&ctx("/id", None), Locale::Id);
        assert_eq!(decision.cookie(), Some(LocaleCookie::new(Locale::Id)));
        assert!(!decision.is_redirect());
    }

    #[test]
    fn test_locale_from_path() {
        assert_eq!(locale_from_path("/id"), Some(Locale::Id));
        assert_eq!(locale_from_path("/id/"), Some(Locale::Id));
        assert_eq!(locale_from_path("/en/team"), Some(Locale::En));
        assert_eq!(locale_from_path("/idea"), None);
        assert_eq!(locale_from_path("/english"), None);
        assert_eq!(locale_from_path("/EN/"), None);
        assert_eq!(locale_from_path("/"), None);
        assert_eq!(locale_from_path(""), None);
    }

    // ==================== Redirect Tests ====================

    #[test]
    fn test_root_redirects_to_locale_home() {
        let decision = decide_routing(&ctx("/", None), Locale::Id);
        assert_eq!(
            decision,
            RoutingDecision::Redirect {
                location: "/id/".to_string(),
                locale: Locale::Id,
                cookie: LocaleCookie::new(Locale::Id),
            }
        );
    }

    #[test]
    fn test_redirect_preserves_path_and_query() {
        let context = RequestContext {
            path: "/careers",
            query: Some("utm_source=ads"),
            ..RequestContext::default()
        };
        match decide_routing(&context, Locale::En) {
            RoutingDecision::Redirect { location, .. } => {
                assert_eq!(location, "/en/careers?utm_source=ads")
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_locale_segment_is_prefixed() {
        let decision = decide_routing(&ctx("/fr/", None), Locale::Id);
        assert!(matches!(
            decision,
            RoutingDecision::Redirect { ref location, .. } if location == "/id/fr/"
        ));
    }

    #[test]
    fn test_route_request_uses_negotiated_locale() {
        let context = RequestContext {
            path: "/",
            accept_language: Some("en-US,en;q=0.9"),
            ..RequestContext::default()
        };
        let (decision, negotiated) = route_request(&context, Locale::Id);
        assert_eq!(negotiated.locale, Locale::En);
        assert!(matches!(
            decision,
            RoutingDecision::Redirect { ref location, locale: Locale::En, .. } if location == "/en/"
        ));
    }

    // ==================== Excluded Path Tests ====================

    #[test]
    fn test_excluded_paths_pass_through_without_cookie() {
        for path in [
            "/favicon.ico",
            "/api/health",
            "/_next/static/chunk.js",
            "/robots.txt",
            "/sitemap.xml",
            "/manifest.webmanifest",
            "/logo.png",
            "/clients/act-client-kartinis.PNG",
            "/team/act-profile-audria.jpeg",
            "/styles/site.css",
            "/en/logo.png",
        ] {
            for locale in Locale::ALL {
                assert_eq!(
                    decide_routing(&ctx(path, Some("id")), locale),
                    RoutingDecision::PassThrough {
                        reason: PassThroughReason::Excluded,
                        set_cookie: None
                    },
                    "path {} should be excluded",
                    path
                );
            }
        }
    }

    #[test]
    fn test_dotted_infrastructure_paths_are_not_redirected() {
        for path in [
            "/.well-known/acme-challenge/Xy12Token",
            "/.well-known/change-password",
            "/.well-known/security.txt",
            "/v1.2/about",
            "/id/v1.2/about",
        ] {
            let decision = decide_routing(&ctx(path, None), Locale::Id);
            assert!(!decision.is_redirect(), "path {} should not redirect", path);
            assert_eq!(decision.cookie(), None, "path {} should not set a cookie", path);
        }
    }

    #[test]
    fn test_pages_are_not_excluded() {
        assert!(!is_excluded_path("/"));
        assert!(!is_excluded_path("/about"));
        assert!(!is_excluded_path("/en/"));
        assert!(!is_excluded_path("/team/"));
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_cookie_header_value() {
        assert_eq!(
            LocaleCookie::new(Locale::En).header_value(),
            "locale=en; Max-Age=31536000; Path=/; SameSite=Lax"
        );
    }

    #[test]
    fn test_locale_cookie_value_parsing() {
        assert_eq!(locale_cookie_value(["theme=dark; locale=en"]), Some("en"));
        assert_eq!(locale_cookie_value(["locale=\"id\""]), Some("id"));
        assert_eq!(locale_cookie_value(["a=1", " locale = en "]), Some("en"));
        assert_eq!(locale_cookie_value(["mylocale=en"]), None);
        assert_eq!(locale_cookie_value(Vec::<&str>::new()), None);
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_redirect_round_trip(segments in proptest::collection::vec("[a-z]{1,8}", 0..4), trailing in any::<bool>(), use_en in any::<bool>()) {
            let locale = if use_en { Locale::En } else { Locale::Id };
            let mut path = format!("/{}", segments.join("/"));
            if trailing && !segments.is_empty() {
                path.push('/');
            }
            prop_assume!(locale_from_path(&path).is_none());
            prop_assume!(!is_excluded_path(&path));

            let first = decide_routing(&ctx(&path, None), locale);
            let location = match first {
                RoutingDecision::Redirect { location, cookie, .. } => {
                    prop_assert_eq!(cookie.locale, locale);
                    location
                }
                other => return Err(TestCaseError::fail(format!("expected redirect, got {:?}", other))),
            };
            prop_assert_eq!(&location, &format!("/{}{}", locale.code(), path));

            let second = decide_routing(&ctx(&location, Some(locale.code())), locale);
            prop_assert_eq!(
                second,
                RoutingDecision::PassThrough {
                    reason: PassThroughReason::LocaleInPath,
                    set_cookie: None
                }
            );
        }

        #[test]
        fn prop_routing_never_panics(path in ".*", cookie in proptest::option::of(".*")) {
            let context = RequestContext {
                path: &path,
                locale_cookie: cookie.as_deref(),
                ..RequestContext::default()
            };
            let _ = route_request(&context, Locale::Id);
        }
    }
}
