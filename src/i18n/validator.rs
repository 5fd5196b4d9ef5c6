//! Content parity validation between the two locale bundles.
//!
//! Both locales must describe the same page: the same number of records in
//! every section, no blank copy, and the same headline figures (e.g. "100+",
//! "30-90") and contact details in both languages.

use crate::content::{ContentBundle, SectionHeading};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about content parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems: mismatched counts, blank required copy
    pub errors: Vec<String>,

    /// Content drift between locales
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for bilingual content tables.
pub struct ContentValidator;

static FIGURE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl ContentValidator {
    /// Validate that two bundles are structurally equivalent.
    ///
    /// This function checks that:
    /// - every section list has the same length in both bundles
    /// - each service lists the same number of features
    /// - required titles and descriptions are not blank
    /// - hero stat values and SLA highlight figures match
    /// - emails and URLs mentioned in long-form copy match
    pub fn validate(a: &ContentBundle, b: &ContentBundle) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Check list lengths
        let counts = [
            ("hero.stats", a.hero.stats.len(), b.hero.stats.len()),
            ("about.paragraphs", a.about.paragraphs.len(), b.about.paragraphs.len()),
            ("about.highlights", a.about.highlights.len(), b.about.highlights.len()),
            (
                "vision_mission.missions",
                a.vision_mission.missions.len(),
                b.vision_mission.missions.len(),
            ),
            ("values.items", a.values.items.len(), b.values.items.len()),
            ("services.items", a.services.items.len(), b.services.items.len()),
            ("advantages.items", a.advantages.items.len(), b.advantages.items.len()),
            ("industries.items", a.industries.items.len(), b.industries.items.len()),
            ("workflow.steps", a.workflow.steps.len(), b.workflow.steps.len()),
            ("sla.guarantees", a.sla.guarantees.len(), b.sla.guarantees.len()),
        ];
        for (section, left, right) in counts {
            if left != right {
                report.errors.push(format!(
                    "Item count mismatch in {}: {} vs {}",
                    section, left, right
                ));
            }
        }

        for (index, (left, right)) in a.services.items.iter().zip(b.services.items).enumerate() {
            if left.features.len() != right.features.len() {
                report.errors.push(format!(
                    "Feature count mismatch in services.items[{}]: {} vs {}",
                    index,
                    left.features.len(),
                    right.features.len()
                ));
            }
        }

        // Check required copy
        for bundle in [a, b] {
            Self::check_blank(&mut report, bundle);
        }

        // Check headline figures
        for (index, (left, right)) in a.hero.stats.iter().zip(b.hero.stats).enumerate() {
            if left.value != right.value {
                report.warnings.push(format!(
                    "Stat value mismatch in hero.stats[{}]: {:?} vs {:?}",
                    index, left.value, right.value
                ));
            }
        }
        for (index, (left, right)) in a.sla.guarantees.iter().zip(b.sla.guarantees).enumerate() {
            let left_figures = Self::extract_figures(left.highlight);
            let right_figures = Self::extract_figures(right.highlight);
            if left_figures != right_figures {
                report.warnings.push(format!(
                    "Figure mismatch in sla.guarantees[{}]: {:?} vs {:?}",
                    index, left_figures, right_figures
                ));
            }
        }

        // Check contact details in long-form copy
        let left_text = Self::long_form_text(a);
        let right_text = Self::long_form_text(b);
        let left_emails = Self::extract_emails(&left_text);
        let right_emails = Self::extract_emails(&right_text);
        if left_emails != right_emails {
            report.warnings.push(format!(
                "Email mismatch: {:?} vs {:?}",
                left_emails, right_emails
            ));
        }
        let left_urls = Self::extract_urls(&left_text);
        let right_urls = Self::extract_urls(&right_text);
        if left_urls != right_urls {
            report.warnings.push(format!(
                "URL mismatch: {} URLs vs {} URLs",
                left_urls.len(),
                right_urls.len()
            ));
        }

        report
    }

    fn check_blank(report: &mut ValidationReport, bundle: &ContentBundle) {
        let mut required: Vec<(&'static str, &str)> = vec![
            ("hero.headline", bundle.hero.headline),
            ("hero.description", bundle.hero.description),
            ("hero.cta", bundle.hero.cta),
            ("about.title", bundle.about.title),
            ("vision_mission.vision", bundle.vision_mission.vision),
            ("services.cta", bundle.services.cta),
            ("industries.closing", bundle.industries.closing),
            ("contact.cta", bundle.contact.cta),
        ];

        let headings: [(&'static str, &SectionHeading); 9] = [
            ("values", &bundle.values.heading),
            ("services", &bundle.services.heading),
            ("advantages", &bundle.advantages.heading),
            ("industries", &bundle.industries.heading),
            ("workflow", &bundle.workflow.heading),
            ("sla", &bundle.sla.heading),
            ("team", &bundle.team),
            ("clients", &bundle.clients),
            ("contact", &bundle.contact.heading),
        ];
        for (section, heading) in headings {
            required.push((section, heading.title));
        }

        required.extend(bundle.about.highlights.iter().map(|item| ("about.highlights", item.title)));
        required.extend(bundle.services.items.iter().map(|item| ("services.items", item.description)));
        required.extend(bundle.advantages.items.iter().map(|item| ("advantages.items", item.description)));
        required.extend(bundle.workflow.steps.iter().map(|item| ("workflow.steps", item.description)));
        required.extend(bundle.sla.guarantees.iter().map(|item| ("sla.guarantees", item.description)));
        required.extend(bundle.industries.items.iter().map(|item| ("industries.items", item.name)));

        for (field, value) in required {
            if value.trim().is_empty() {
                report.errors.push(format!("Blank copy in {}", field));
            }
        }
    }

    /// Paragraph-level copy, joined for pattern extraction.
    fn long_form_text(bundle: &ContentBundle) -> String {
        let mut parts = vec![
            bundle.hero.description,
            bundle.vision_mission.vision,
            bundle.contact.heading.description,
        ];
        parts.extend(bundle.about.paragraphs.iter().copied());
        parts.extend(bundle.services.items.iter().map(|item| item.description));
        parts.join("\n")
    }

    /// Extract numeric figures ("100", "1-2", "30-90") from text
    fn extract_figures(text: &str) -> Vec<String> {
        let regex = FIGURE_REGEX.get_or_init(|| Regex::new(r"\d+(?:-\d+)?").unwrap());

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    /// Extract email addresses from text
    fn extract_emails(text: &str) -> Vec<String> {
        let regex = EMAIL_REGEX
            .get_or_init(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}
