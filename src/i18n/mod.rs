//! Internationalization (i18n) module for the bilingual site.
//!
//! All locale-related logic lives here: the closed set of locales, locale
//! negotiation and routing, site chrome strings, and content parity checks.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for locale metadata
//! - `locale`: The `Locale` enum (`id`, `en`)
//! - `negotiation`: Cookie / `Accept-Language` resolution
//! - `routing`: Redirect and cookie decisions per request path
//! - `strings`: Localized navigation, footer and label strings
//! - `validator`: Parity checks between the two content bundles
//! - `metrics`: Negotiation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{decide_routing, resolve_locale, RequestContext};
//!
//! let locale = resolve_locale(None, Some("en-US,en;q=0.9"));
//! let ctx = RequestContext { path: "/", ..RequestContext::default() };
//! let decision = decide_routing(&ctx, locale); // Redirect to "/en/"
//! ```

mod locale;
mod metrics;
pub mod negotiation;
mod registry;
pub mod routing;
mod strings;
mod validator;

pub use locale::Locale;
pub use metrics::{MetricsReport, NegotiationMetrics};
pub use negotiation::{resolve_locale, resolve_locale_or, PreferenceSource};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use routing::{
    decide_routing, route_request, LocaleCookie, PassThroughReason, RequestContext, RoutingDecision,
};
pub use strings::{LocaleStrings, NavItem};
pub use validator::{ContentValidator, ValidationReport};
