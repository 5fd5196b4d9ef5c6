//! Locale negotiation metrics.
//!
//! Counts how requests were routed and which signal decided the locale.

use crate::i18n::negotiation::PreferenceSource;
use crate::i18n::routing::{PassThroughReason, RoutingDecision};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global negotiation metrics singleton.
pub struct NegotiationMetrics {
    /// Requests redirected to a locale-prefixed path
    redirects: AtomicUsize,

    /// Locale-prefixed requests served as-is
    locale_passthroughs: AtomicUsize,

    /// Locale-prefixed requests that also refreshed the cookie
    cookie_refreshes: AtomicUsize,

    /// Excluded paths (assets, API) served untouched
    excluded_passthroughs: AtomicUsize,

    /// Redirects decided by the cookie
    resolved_by_cookie: AtomicUsize,

    /// Redirects decided by `Accept-Language`
    resolved_by_header: AtomicUsize,

    /// Redirects that fell back to the default locale
    resolved_by_fallback: AtomicUsize,
}

static METRICS: OnceLock<NegotiationMetrics> = OnceLock::new();

impl NegotiationMetrics {
    /// Get the global metrics instance.
    pub fn global() -> &'static NegotiationMetrics {
        METRICS.get_or_init(|| NegotiationMetrics {
            redirects: AtomicUsize::new(0),
            locale_passthroughs: AtomicUsize::new(0),
            cookie_refreshes: AtomicUsize::new(0),
            excluded_passthroughs: AtomicUsize::new(0),
            resolved_by_cookie: AtomicUsize::new(0),
            resolved_by_header: AtomicUsize::new(0),
            resolved_by_fallback: AtomicUsize::new(0),
        })
    }

    /// Record one routing outcome.
    ///
    /// The source only counts on redirects, where it mattered.
    pub fn record(&self, decision: &RoutingDecision, source: PreferenceSource) {
        match decision {
            RoutingDecision::Redirect { .. } => {
                self.redirects.fetch_add(1, Ordering::Relaxed);
                let counter = match source {
                    PreferenceSource::Cookie => &self.resolved_by_cookie,
                    PreferenceSource::Header => &self.resolved_by_header,
                    PreferenceSource::Fallback => &self.resolved_by_fallback,
                };
                counter.fetch_add(1, Ordering::Relaxed);
            }
            RoutingDecision::PassThrough {
                reason: PassThroughReason::LocaleInPath,
                set_cookie,
            } => {
                self.locale_passthroughs.fetch_add(1, Ordering::Relaxed);
                if set_cookie.is_some() {
                    self.cookie_refreshes.fetch_add(1, Ordering::Relaxed);
                }
            }
            RoutingDecision::PassThrough {
                reason: PassThroughReason::Excluded,
                ..
            } => {
                self.excluded_passthroughs.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::Relaxed)
    }

    pub fn cookie_refreshes(&self) -> usize {
        self.cookie_refreshes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let redirects = self.redirects();
        let header = self.resolved_by_header.load(Ordering::Relaxed);
        let header_match_rate = if redirects > 0 {
            (header as f64 / redirects as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            redirects,
            locale_passthroughs: self.locale_passthroughs.load(Ordering::Relaxed),
            cookie_refreshes: self.cookie_refreshes(),
            excluded_passthroughs: self.excluded_passthroughs.load(Ordering::Relaxed),
            resolved_by_cookie: self.resolved_by_cookie.load(Ordering::Relaxed),
            resolved_by_header: header,
            resolved_by_fallback: self.resolved_by_fallback.load(Ordering::Relaxed),
            header_match_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        for counter in [
            &self.redirects,
            &self.locale_passthroughs,
            &self.cookie_refreshes,
            &self.excluded_passthroughs,
            &self.resolved_by_cookie,
            &self.resolved_by_header,
            &self.resolved_by_fallback,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Snapshot of negotiation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub redirects: usize,
    pub locale_passthroughs: usize,
    pub cookie_refreshes: usize,
    pub excluded_passthroughs: usize,
    pub resolved_by_cookie: usize,
    pub resolved_by_header: usize,
    pub resolved_by_fallback: usize,

    /// Share of redirects decided by `Accept-Language`, as a percentage (0-100)
    pub header_match_rate: f64,
}
