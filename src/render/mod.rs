//! Server-side HTML rendering of the landing page.
//!
//! Pages are assembled with `write!` into a `String`. All content passes
//! through `escape_html`; JSON islands go through `json_script`.

mod sections;

use chrono::Datelike;
use serde::Serialize;
use std::fmt::Write;

use crate::animation::{MotionConfig, MotionProfile};
use crate::config::Config;
use crate::error::SiteError;
use crate::i18n::{Locale, LocaleStrings};
use crate::seo::{structured_data, PageMetadata, SITE_NAME};

/// Per-request inputs to `render_page`.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,
    pub config: &'a Config,
    pub profile: MotionProfile,
    /// Year shown in the footer copyright
    pub year: i32,
}

impl<'a> PageContext<'a> {
    pub fn new(locale: Locale, config: &'a Config, profile: MotionProfile) -> Self {
        Self {
            locale,
            config,
            profile,
            year: chrono::Utc::now().year(),
        }
    }
}

/// Render the full landing page document for `ctx.locale`.
pub fn render_page(ctx: &PageContext<'_>) -> Result<String, SiteError> {
    let mut html = String::with_capacity(64 * 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"{}\" class=\"scroll-smooth\">", ctx.locale.code())?;
    render_head(&mut html, ctx)?;
    writeln!(html, "<body>")?;
    render_navigation(&mut html, ctx)?;
    writeln!(html, "<main>")?;
    sections::render_sections(&mut html, ctx)?;
    writeln!(html, "</main>")?;
    render_footer(&mut html, ctx)?;
    writeln!(
        html,
        "<script id=\"motion-config\" type=\"application/json\">{}</script>",
        json_script(&MotionConfig::for_profile(&ctx.profile))?
    )?;
    writeln!(html, "<script src=\"/scripts/motion.js\" defer></script>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

/// Localized 404 page.
pub fn render_not_found(locale: Locale) -> Result<String, SiteError> {
    let strings = LocaleStrings::for_locale(locale);
    let mut html = String::with_capacity(2048);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"{}\">", locale.code())?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(html, "<meta name=\"robots\" content=\"noindex\">")?;
    writeln!(
        html,
        "<title>{} | {}</title>",
        escape_html(strings.not_found_title),
        SITE_NAME
    )?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"/styles/site.css\">")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<main class=\"not-found\">")?;
    writeln!(html, "<h1>404</h1>")?;
    writeln!(html, "<h2>{}</h2>", escape_html(strings.not_found_title))?;
    writeln!(html, "<p>{}</p>", escape_html(strings.not_found_body))?;
    writeln!(
        html,
        "<a href=\"/{}/\">{}</a>",
        locale.code(),
        escape_html(strings.not_found_cta)
    )?;
    writeln!(html, "</main>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

fn render_head(html: &mut String, ctx: &PageContext<'_>) -> Result<(), SiteError> {
    let meta = PageMetadata::for_locale(ctx.locale, ctx.config);

    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(html, "<title>{}</title>", escape_html(&meta.title))?;
    meta_name(html, "description", &meta.description)?;
    meta_name(html, "keywords", &meta.keywords)?;
    meta_name(html, "author", &meta.author)?;
    meta_name(html, "robots", &meta.robots)?;
    meta_name(html, "googlebot", &meta.robots)?;
    if let Some(token) = &meta.google_site_verification {
        meta_name(html, "google-site-verification", token)?;
    }

    writeln!(html, "<link rel=\"canonical\" href=\"{}\">", escape_html(&meta.canonical))?;
    for alternate in &meta.alternates {
        writeln!(
            html,
            "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">",
            escape_html(&alternate.hreflang),
            escape_html(&alternate.href)
        )?;
    }

    // Open Graph
    let og = &meta.open_graph;
    meta_property(html, "og:title", &og.title)?;
    meta_property(html, "og:description", &og.description)?;
    meta_property(html, "og:type", &og.kind)?;
    meta_property(html, "og:locale", &og.locale)?;
    meta_property(html, "og:locale:alternate", &og.alternate_locale)?;
    meta_property(html, "og:url", &og.url)?;
    meta_property(html, "og:site_name", &og.site_name)?;
    meta_property(html, "og:image", &og.image)?;
    meta_property(html, "og:image:width", &og.image_width.to_string())?;
    meta_property(html, "og:image:height", &og.image_height.to_string())?;
    meta_property(html, "og:image:alt", &og.image_alt)?;

    // Twitter
    meta_name(html, "twitter:card", &meta.twitter.card)?;
    meta_name(html, "twitter:title", &meta.twitter.title)?;
    meta_name(html, "twitter:description", &meta.twitter.description)?;
    meta_name(html, "twitter:image", &meta.twitter.image)?;

    writeln!(html, "<link rel=\"icon\" href=\"/favicon.ico\">")?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"/styles/site.css\">")?;

    for document in structured_data(ctx.locale, ctx.config) {
        writeln!(
            html,
            "<script type=\"application/ld+json\">{}</script>",
            json_script(&document)?
        )?;
    }

    writeln!(html, "</head>")?;
    Ok(())
}

fn render_navigation(html: &mut String, ctx: &PageContext<'_>) -> Result<(), SiteError> {
    let strings = LocaleStrings::for_locale(ctx.locale);
    let other = ctx.locale.other();

    writeln!(html, "<header class=\"site-nav\">")?;
    writeln!(html, "<nav>")?;
    writeln!(
        html,
        "<a class=\"brand\" href=\"/{}/\"><img src=\"/logo.png\" alt=\"{}\" width=\"40\" height=\"40\"> ACTALENT</a>",
        ctx.locale.code(),
        escape_html(SITE_NAME)
    )?;
    writeln!(html, "<ul class=\"nav-links\">")?;
    for item in strings.nav {
        writeln!(
            html,
            "<li><a href=\"#{}\">{}</a></li>",
            item.anchor,
            escape_html(item.label)
        )?;
    }
    writeln!(html, "</ul>")?;
    writeln!(
        html,
        "<a class=\"lang-toggle\" href=\"/{}/\" hreflang=\"{}\" aria-label=\"{}\">{}</a>",
        other.code(),
        other.config().hreflang,
        escape_html(strings.switch_language),
        other.code().to_uppercase()
    )?;
    writeln!(
        html,
        "<button class=\"menu-toggle\" type=\"button\" aria-label=\"{}\" aria-expanded=\"false\"></button>",
        escape_html(strings.menu_label)
    )?;
    writeln!(html, "</nav>")?;
    writeln!(html, "</header>")?;
    Ok(())
}

fn render_footer(html: &mut String, ctx: &PageContext<'_>) -> Result<(), SiteError> {
    let strings = LocaleStrings::for_locale(ctx.locale);

    writeln!(html, "<footer class=\"site-footer\">")?;
    writeln!(html, "<nav><ul>")?;
    for item in strings.footer_nav {
        writeln!(
            html,
            "<li><a href=\"#{}\">{}</a></li>",
            item.anchor,
            escape_html(item.label)
        )?;
    }
    writeln!(html, "</ul></nav>")?;
    writeln!(
        html,
        "<p class=\"copyright\">&copy; {} {}. {}.</p>",
        ctx.year,
        escape_html(strings.copyright_holder),
        escape_html(strings.rights_reserved)
    )?;
    writeln!(html, "</footer>")?;
    Ok(())
}

fn meta_name(html: &mut String, name: &str, content: &str) -> Result<(), SiteError> {
    writeln!(
        html,
        "<meta name=\"{}\" content=\"{}\">",
        name,
        escape_html(content)
    )?;
    Ok(())
}

fn meta_property(html: &mut String, property: &str, content: &str) -> Result<(), SiteError> {
    writeln!(
        html,
        "<meta property=\"{}\" content=\"{}\">",
        property,
        escape_html(content)
    )?;
    Ok(())
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Serialize for embedding inside a `<script>` element.
fn json_script<T: Serialize>(value: &T) -> Result<String, SiteError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{bundle, CLIENTS};

    fn render(locale: Locale, profile: MotionProfile) -> String {
        let config = Config::default();
        let ctx = PageContext {
            locale,
            config: &config,
            profile,
            year: 2026,
        };
        render_page(&ctx).unwrap()
    }

    // ==================== Escaping Tests ====================

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Finance & Tax"), "Finance &amp; Tax");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("say \"hi\" it's"), "say &quot;hi&quot; it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_json_script_escapes_closing_tags() {
        let json = json_script(&"</script>").unwrap();
        assert!(!json.contains("</"));
    }

    // ==================== Page Tests ====================

    #[test]
    fn test_page_lang_matches_locale() {
        assert!(render(Locale::Id, MotionProfile::default()).contains("<html lang=\"id\""));
        assert!(render(Locale::En, MotionProfile::default()).contains("<html lang=\"en\""));
    }

    #[test]
    fn test_page_contains_all_sections_in_order() {
        let html = render(Locale::En, MotionProfile::default());
        let mut last = 0;
        for anchor in [
            "home",
            "about",
            "vision-mission",
            "values",
            "services",
            "advantages",
            "industries",
            "workflow",
            "sla",
            "team",
            "clients",
            "contact",
        ] {
            let needle = format!("<section id=\"{}\"", anchor);
            let position = html.find(&needle).unwrap_or_else(|| panic!("missing section {}", anchor));
            assert!(position > last, "section {} out of order", anchor);
            last = position;
        }
    }

    #[test]
    fn test_page_content_is_localized() {
        let id = render(Locale::Id, MotionProfile::default());
        let en = render(Locale::En, MotionProfile::default());
        assert!(id.contains(bundle(Locale::Id).hero.cta));
        assert!(en.contains(bundle(Locale::En).hero.cta));
        assert!(!en.contains(bundle(Locale::Id).hero.cta));
    }

    #[test]
    fn test_page_escapes_text() {
        let html = render(Locale::En, MotionProfile::default());
        assert!(html.contains("Head of Finance &amp; Tax"));
        assert!(!html.contains("Finance & Tax"));
    }

    #[test]
    fn test_page_head_metadata() {
        let html = render(Locale::En, MotionProfile::default());
        assert!(html.contains("<link rel=\"canonical\" href=\"https://actalent.id/en/\">"));
        assert!(html.contains("hreflang=\"x-default\""));
        assert!(html.contains("<meta property=\"og:locale\" content=\"en_US\">"));
        assert_eq!(html.matches("application/ld+json").count(), 4);
        assert!(!html.contains("google-site-verification"));
    }

    #[test]
    fn test_language_toggle_links_other_locale() {
        let html = render(Locale::Id, MotionProfile::default());
        assert!(html.contains("class=\"lang-toggle\" href=\"/en/\""));
    }

    #[test]
    fn test_footer_year() {
        let html = render(Locale::Id, MotionProfile::default());
        assert!(html.contains("&copy; 2026 PT ACTALENT SOLUTIONS PARTNERS"));
    }

    // ==================== Motion Tests ====================

    #[test]
    fn test_animation_attributes_present_by_default() {
        let html = render(Locale::En, MotionProfile::default());
        assert!(html.contains("data-animate=\"fade-in-up\""));
        assert!(html.contains("data-count-to=\"100\""));
        assert!(html.contains("id=\"motion-config\""));
    }

    #[test]
    fn test_reduced_motion_strips_animation_attributes() {
        let profile = MotionProfile {
            mobile: false,
            reduced_motion: true,
        };
        let html = render(Locale::En, profile);
        assert!(!html.contains("data-animate"));
        assert!(!html.contains("data-duration"));
        assert!(!html.contains("data-count-to"));
        assert!(html.contains("\"enabled\":false"));
    }

    #[test]
    fn test_clients_marquee_duplicates_list() {
        let html = render(Locale::En, MotionProfile::default());
        assert_eq!(html.matches("class=\"client-logo\"").count(), CLIENTS.len() * 2);
    }

    // ==================== Not Found Tests ====================

    #[test]
    fn test_not_found_is_localized() {
        let id = render_not_found(Locale::Id).unwrap();
        let en = render_not_found(Locale::En).unwrap();
        assert!(id.contains("<html lang=\"id\">"));
        assert!(id.contains("Halaman tidak ditemukan"));
        assert!(id.contains("href=\"/id/\""));
        assert!(en.contains("Page not found"));
    }
}
