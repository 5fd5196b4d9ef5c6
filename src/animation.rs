//! Entrance animation parameters for the landing page.
//!
//! The page is rendered server-side; animations run client-side from the
//! `data-animate` attributes and the `motion-config` JSON emitted here.
//! This module owns the numbers: per-section timing, preset hidden states,
//! counter tweening, parallax and the industries masonry wave.
//!
//! The server never runs the tweens. [`counter_value`] and
//! [`parallax_offset`] are the reference formulas for `/scripts/motion.js`,
//! which is deployed with the static assets rather than built from this
//! crate; the script reads `counter_duration_ms` and `parallax_speed` from
//! [`MotionConfig`] and must reproduce these results.

use axum::http::HeaderMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Default parallax speed factor.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;

/// Default counter tween length, in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

/// Industries cards appear in a wave rather than left-to-right.
const MASONRY_PATTERN: [f64; 8] = [0.0, 0.08, 0.04, 0.12, 0.02, 0.1, 0.06, 0.14];

// ==================== Easing ====================

/// Easing curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    EaseOut,
    EaseInOut,
    BackOut,
    CircOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    /// The curve used by headline and card entrances.
    pub const SIGNATURE: Ease = Ease::CubicBezier(0.22, 1.0, 0.36, 1.0);

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match self {
            Ease::EaseOut => "ease-out".to_string(),
            Ease::EaseInOut => "ease-in-out".to_string(),
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)".to_string(),
            Ease::CircOut => "cubic-bezier(0, 0.55, 0.45, 1)".to_string(),
            Ease::CubicBezier(x1, y1, x2, y2) => format!(
                "cubic-bezier({}, {}, {}, {})",
                format_number(*x1),
                format_number(*y1),
                format_number(*x2),
                format_number(*y2)
            ),
        }
    }
}

// ==================== Presets ====================

/// Entrance animation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    FadeInUp,
    FadeInLeft,
    FadeInRight,
    ScaleIn,
    FlipIn,
    StaggerItem,
}

/// Initial (pre-entrance) visual state of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiddenState {
    pub opacity: f64,
    pub transform: String,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::FadeInUp,
        Preset::FadeInLeft,
        Preset::FadeInRight,
        Preset::ScaleIn,
        Preset::FlipIn,
        Preset::StaggerItem,
    ];

    /// Attribute value used in `data-animate`.
    pub const fn name(&self) -> &'static str {
        match self {
            Preset::FadeInUp => "fade-in-up",
            Preset::FadeInLeft => "fade-in-left",
            Preset::FadeInRight => "fade-in-right",
            Preset::ScaleIn => "scale-in",
            Preset::FlipIn => "flip-in",
            Preset::StaggerItem => "stagger-item",
        }
    }

    /// Hidden state for this preset. Mobile visitors get a softer start.
    pub fn hidden_state(&self, profile: &MotionProfile) -> HiddenState {
        let soft = profile.mobile;
        let transform = match self {
            Preset::FadeInUp => format!("translateY({}px)", if soft { 20 } else { 30 }),
            Preset::FadeInLeft => format!("translateX(-{}px)", if soft { 20 } else { 50 }),
            Preset::FadeInRight => format!("translateX({}px)", if soft { 20 } else { 50 }),
            Preset::ScaleIn => format!(
                "scale({}) translateY({}px)",
                if soft { "0.9" } else { "0.8" },
                if soft { 20 } else { 30 }
            ),
            Preset::FlipIn => "rotateY(15deg)".to_string(),
            Preset::StaggerItem => "translateY(20px)".to_string(),
        };

        HiddenState {
            opacity: 0.0,
            transform,
        }
    }

    /// Duration (seconds) and curve when no section timing applies.
    pub const fn default_transition(&self) -> (f64, Ease) {
        match self {
            Preset::FadeInUp | Preset::FadeInLeft | Preset::FadeInRight => (0.6, Ease::EaseOut),
            Preset::ScaleIn => (0.5, Ease::BackOut),
            Preset::FlipIn => (0.7, Ease::EaseInOut),
            Preset::StaggerItem => (0.5, Ease::EaseOut),
        }
    }
}

// ==================== Section Timing ====================

/// Page sections that carry their own timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    VisionMission,
    Values,
    Services,
    Advantages,
    Industries,
    Workflow,
    Sla,
    Team,
    Clients,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTiming {
    /// Seconds
    pub duration: f64,
    /// Seconds between consecutive children
    pub stagger_delay: f64,
    pub ease: Ease,
}

impl SectionId {
    pub const ALL: [SectionId; 12] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::VisionMission,
        SectionId::Values,
        SectionId::Services,
        SectionId::Advantages,
        SectionId::Industries,
        SectionId::Workflow,
        SectionId::Sla,
        SectionId::Team,
        SectionId::Clients,
        SectionId::Contact,
    ];

    /// Element id of the section on the page.
    pub const fn anchor(&self) -> &'static str {
        match self {
            SectionId::Hero => "home",
            SectionId::About => "about",
            SectionId::VisionMission => "vision-mission",
            SectionId::Values => "values",
            SectionId::Services => "services",
            SectionId::Advantages => "advantages",
            SectionId::Industries => "industries",
            SectionId::Workflow => "workflow",
            SectionId::Sla => "sla",
            SectionId::Team => "team",
            SectionId::Clients => "clients",
            SectionId::Contact => "contact",
        }
    }

    pub const fn timing(&self) -> SectionTiming {
        let (duration, stagger_delay, ease) = match self {
            SectionId::Hero => (0.8, 0.15, Ease::EaseOut),
            SectionId::About => (0.6, 0.1, Ease::EaseOut),
            SectionId::Values => (0.5, 0.08, Ease::BackOut),
            SectionId::VisionMission => (0.7, 0.12, Ease::EaseInOut),
            SectionId::Services => (0.6, 0.1, Ease::EaseOut),
            SectionId::Advantages => (0.7, 0.1, Ease::CircOut),
            SectionId::Workflow => (0.8, 0.15, Ease::EaseInOut),
            SectionId::Sla => (0.6, 0.1, Ease::BackOut),
            SectionId::Industries => (0.5, 0.08, Ease::EaseOut),
            SectionId::Team => (0.7, 0.1, Ease::EaseOut),
            SectionId::Clients => (0.6, 0.0, Ease::EaseOut),
            SectionId::Contact => (0.5, 0.08, Ease::BackOut),
        };
        SectionTiming {
            duration,
            stagger_delay,
            ease,
        }
    }

    /// Entrance for the `index`-th child of this section.
    pub fn entrance(&self, preset: Preset, index: usize) -> Entrance {
        let timing = self.timing();
        Entrance {
            preset,
            duration: timing.duration,
            delay: timing.stagger_delay * index as f64,
            ease: timing.ease,
        }
    }
}

// ==================== Entrance Attributes ====================

/// One element's entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub preset: Preset,
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
    pub ease: Ease,
}

impl Entrance {
    /// Entrance using the preset's own transition.
    pub fn preset_default(preset: Preset, delay: f64) -> Self {
        let (duration, ease) = preset.default_transition();
        Self {
            preset,
            duration,
            delay,
            ease,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// HTML attributes (with a leading space), or nothing under reduced motion.
    pub fn attrs(&self, profile: &MotionProfile) -> String {
        if profile.reduced_motion {
            return String::new();
        }
        format!(
            " data-animate=\"{}\" data-duration=\"{}\" data-delay=\"{}\" data-ease=\"{}\"",
            self.preset.name(),
            format_number(self.duration),
            format_number(self.delay),
            self.ease.css()
        )
    }
}

// ==================== Motion Profile ====================

/// Per-request animation tuning derived from client hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionProfile {
    pub mobile: bool,
    pub reduced_motion: bool,
}

impl MotionProfile {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        };

        let mobile = match header("sec-ch-ua-mobile") {
            Some(hint) => hint == "?1",
            None => header("user-agent").is_some_and(|ua| ua.contains("Mobi")),
        };
        let reduced_motion = header("sec-ch-prefers-reduced-motion")
            .is_some_and(|hint| hint.eq_ignore_ascii_case("reduce"));

        Self {
            mobile,
            reduced_motion,
        }
    }
}

/// Client-side motion configuration, embedded as JSON in the page.
#[derive(Debug, Clone, Serialize)]
pub struct MotionConfig {
    pub enabled: bool,
    pub mobile: bool,
    pub hidden: BTreeMap<Preset, HiddenState>,
    pub counter_duration_ms: u64,
    pub parallax_speed: f64,
}

impl MotionConfig {
    pub fn for_profile(profile: &MotionProfile) -> Self {
        Self {
            enabled: !profile.reduced_motion,
            mobile: profile.mobile,
            hidden: Preset::ALL
                .iter()
                .map(|preset| (*preset, preset.hidden_state(profile)))
                .collect(),
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            parallax_speed: DEFAULT_PARALLAX_SPEED,
        }
    }
}

// ==================== Tweening ====================
//
// Client-side contract; see the module docs.

/// Animated counter value after `elapsed_ms` of a `duration_ms` tween.
///
/// Ease-out cubic, floored, and exactly `end` once the tween is complete.
pub fn counter_value(end: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return end;
    }
    let progress = elapsed_ms as f64 / duration_ms as f64;
    let eased = 1.0 - (1.0 - progress).powi(3);
    ((end as f64) * eased).floor() as u64
}

/// Vertical parallax offset for an element at `element_top`.
pub fn parallax_offset(scroll_y: f64, element_top: f64, speed: f64) -> f64 {
    (scroll_y - element_top) * speed
}

/// Entrance delay (seconds) of the `index`-th industries card.
pub fn masonry_delay(index: usize) -> f64 {
    MASONRY_PATTERN[index % MASONRY_PATTERN.len()]
}

/// Counter target parsed from a stat value such as "100+".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTarget<'a> {
    pub end: u64,
    pub suffix: &'a str,
}

impl<'a> CounterTarget<'a> {
    /// Leading digits followed by a digit-free suffix. Ranges ("1-2") are not counters.
    pub fn parse(value: &'a str) -> Option<Self> {
        let digits_end = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        if digits_end == 0 {
            return None;
        }
        let suffix = &value[digits_end..];
        if suffix.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }
        let end = value[..digits_end].parse().ok()?;
        Some(Self { end, suffix })
    }
}

/// Seconds and curve parameters without float noise ("0.3", not "0.30000000000000004").
fn format_number(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use proptest::prelude::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_counter_starts_at_zero() {
        assert_eq!(counter_value(100, 0, 2000), 0);
    }

    #[test]
    fn test_counter_completes_exactly() {
        assert_eq!(counter_value(100, 2000, 2000), 100);
        assert_eq!(counter_value(100, 5000, 2000), 100);
    }

    #[test]
    fn test_counter_eases_out() {
        // Halfway through, ease-out cubic is at 87.5%
        assert_eq!(counter_value(100, 1000, 2000), 87);
    }

    #[test]
    fn test_counter_zero_duration_is_complete() {
        assert_eq!(counter_value(42, 0, 0), 42);
    }

    // ==================== Parallax & Masonry Tests ====================

    #[test]
    fn test_parallax_offset() {
        assert_eq!(parallax_offset(500.0, 200.0, DEFAULT_PARALLAX_SPEED), 90.0);
        assert_eq!(parallax_offset(0.0, 100.0, 0.5), -50.0);
    }

    #[test]
    fn test_masonry_delay_pattern_cycles() {
        assert_eq!(masonry_delay(0), 0.0);
        assert_eq!(masonry_delay(3), 0.12);
        assert_eq!(masonry_delay(7), 0.14);
        assert_eq!(masonry_delay(8), 0.0);
        assert_eq!(masonry_delay(11), 0.12);
    }

    // ==================== Timing Tests ====================

    #[test]
    fn test_section_timings() {
        assert_eq!(SectionId::Hero.timing().duration, 0.8);
        assert_eq!(SectionId::Hero.timing().stagger_delay, 0.15);
        assert_eq!(SectionId::Advantages.timing().ease, Ease::CircOut);
        assert_eq!(SectionId::Clients.timing().stagger_delay, 0.0);
        assert_eq!(SectionId::Contact.timing().ease, Ease::BackOut);
    }

    #[test]
    fn test_section_anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_entrance_staggers_children() {
        let entrance = SectionId::Values.entrance(Preset::ScaleIn, 3);
        assert_eq!(entrance.duration, 0.5);
        assert_eq!(format_number(entrance.delay), "0.24");
    }

    // ==================== Attribute Tests ====================

    #[test]
    fn test_entrance_attrs() {
        let entrance = SectionId::About.entrance(Preset::FadeInLeft, 3);
        let attrs = entrance.attrs(&MotionProfile::default());
        assert_eq!(
            attrs,
            " data-animate=\"fade-in-left\" data-duration=\"0.6\" data-delay=\"0.3\" data-ease=\"ease-out\""
        );
    }

    #[test]
    fn test_reduced_motion_emits_nothing() {
        let profile = MotionProfile {
            mobile: false,
            reduced_motion: true,
        };
        assert!(SectionId::Hero.entrance(Preset::FadeInUp, 0).attrs(&profile).is_empty());
    }

    #[test]
    fn test_signature_ease_css() {
        assert_eq!(Ease::SIGNATURE.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }

    #[test]
    fn test_mobile_softens_hidden_state() {
        let desktop = Preset::ScaleIn.hidden_state(&MotionProfile::default());
        let mobile = Preset::ScaleIn.hidden_state(&MotionProfile {
            mobile: true,
            reduced_motion: false,
        });
        assert_eq!(desktop.transform, "scale(0.8) translateY(30px)");
        assert_eq!(mobile.transform, "scale(0.9) translateY(20px)");
    }

    // ==================== Profile Tests ====================

    #[test]
    fn test_profile_from_client_hints() {
        let mut headers = HeaderMap::new();
        headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?1"));
        headers.insert("sec-ch-prefers-reduced-motion", HeaderValue::from_static("reduce"));

        let profile = MotionProfile::from_headers(&headers);
        assert!(profile.mobile);
        assert!(profile.reduced_motion);
    }

    #[test]
    fn test_profile_user_agent_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "user-agent",
            HeaderValue::from_static("Mozilla/5.0 (iPhone) Mobile/15E148 Safari/604.1"),
        );
        assert!(MotionProfile::from_headers(&headers).mobile);

        headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
        assert!(!MotionProfile::from_headers(&headers).mobile);
    }

    #[test]
    fn test_profile_defaults() {
        assert_eq!(MotionProfile::from_headers(&HeaderMap::new()), MotionProfile::default());
    }

    #[test]
    fn test_motion_config_serializes_presets() {
        let json = serde_json::to_value(MotionConfig::for_profile(&MotionProfile::default())).unwrap();
        assert_eq!(json["enabled"], true);
        assert_eq!(json["hidden"]["fade-in-up"]["transform"], "translateY(30px)");
    }

    // ==================== Counter Target Tests ====================

    #[test]
    fn test_counter_target_parse() {
        assert_eq!(CounterTarget::parse("100+"), Some(CounterTarget { end: 100, suffix: "+" }));
        assert_eq!(CounterTarget::parse("24"), Some(CounterTarget { end: 24, suffix: "" }));
        assert_eq!(CounterTarget::parse("1-2"), None);
        assert_eq!(CounterTarget::parse("30-90"), None);
        assert_eq!(CounterTarget::parse("Success Fee"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.1 * 3.0), "0.3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.22), "0.22");
    }

    proptest! {
        #[test]
        fn prop_counter_bounded_and_monotonic(end in 0u64..1_000_000, duration in 1u64..10_000, a in 0u64..12_000, b in 0u64..12_000) {
            let (early, late) = if a <= b { (a, b) } else { (b, a) };
            let first = counter_value(end, early, duration);
            let second = counter_value(end, late, duration);
            prop_assert!(first <= second);
            prop_assert!(second <= end);
        }
    }
}
