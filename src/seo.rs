//! Search and social metadata: per-locale `<head>` tags, JSON-LD
//! structured data, the sitemap and robots.txt.

use crate::config::Config;
use crate::content::CONTACT_INFO;
use crate::i18n::{Locale, LocaleRegistry};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

pub const SITE_NAME: &str = "ACTALENT Solutions Partners";

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const ROBOTS_DIRECTIVE: &str =
    "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1";

/// Localized copy for the `<head>` of one landing page.
struct MetaCopy {
    title: &'static str,
    description: &'static str,
    social_description: &'static str,
    keywords: &'static str,
}

const INDONESIAN_META: MetaCopy = MetaCopy {
    title: "ACTALENT Solutions Partners | Partner Rekrutmen Strategis",
    description: "PT ACTALENT SOLUTIONS PARTNERS - Partner rekrutmen strategis untuk UMKM. Menghubungkan perusahaan dengan talenta profesional melalui proses cepat, fleksibel, dan terukur. Headhunter, Executive Search, Rekrutmen Umum, Mass Hiring.",
    social_description: "Partner rekrutmen strategis untuk UMKM. 100+ recruiter profesional di seluruh Indonesia.",
    keywords: "rekrutmen, headhunter, executive search, talent acquisition, solusi HR, Indonesia, UMKM, rekrutmen SME, jasa headhunter, pencarian eksekutif",
};

const ENGLISH_META: MetaCopy = MetaCopy {
    title: "ACTALENT Solutions Partners | Strategic Recruitment Partner",
    description: "PT ACTALENT SOLUTIONS PARTNERS - Strategic recruitment partner for SMEs. Connecting companies with professional talent through fast, flexible, and measurable processes. Headhunter, Executive Search, General Recruitment, Mass Hiring.",
    social_description: "Strategic recruitment partner for SMEs. 100+ professional recruiters nationwide.",
    keywords: "recruitment, headhunter, executive search, talent acquisition, HR solutions, Indonesia, SME recruitment, headhunting services, executive recruitment",
};

fn meta_copy(locale: Locale) -> &'static MetaCopy {
    match locale {
        Locale::Id => &INDONESIAN_META,
        Locale::En => &ENGLISH_META,
    }
}

// ==================== Page Metadata ====================

#[derive(Debug, Clone, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub locale: String,
    pub alternate_locale: String,
    pub url: String,
    pub site_name: String,
    pub image: String,
    pub image_width: u32,
    pub image_height: u32,
    pub image_alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Everything that goes into the `<head>` of a landing page.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: String,
    /// Omitted from the page when not configured
    pub google_site_verification: Option<String>,
}

impl PageMetadata {
    pub fn for_locale(locale: Locale, config: &Config) -> Self {
        let copy = meta_copy(locale);
        let canonical = config.locale_url(locale);
        let image = format!("{}/opengraph-image.png", config.base_url);

        let mut alternates: Vec<Alternate> = LocaleRegistry::get()
            .list()
            .iter()
            .map(|entry| Alternate {
                hreflang: entry.hreflang.to_string(),
                href: config.locale_url(entry.locale),
            })
            .collect();
        alternates.push(Alternate {
            hreflang: "x-default".to_string(),
            href: config.locale_url(config.default_locale),
        });

        Self {
            title: copy.title.to_string(),
            description: copy.description.to_string(),
            keywords: copy.keywords.to_string(),
            author: SITE_NAME.to_string(),
            canonical: canonical.clone(),
            alternates,
            open_graph: OpenGraph {
                title: copy.title.to_string(),
                description: copy.social_description.to_string(),
                kind: "website".to_string(),
                locale: locale.config().og_locale.to_string(),
                alternate_locale: locale.other().config().og_locale.to_string(),
                url: canonical,
                site_name: SITE_NAME.to_string(),
                image: image.clone(),
                image_width: OG_IMAGE_WIDTH,
                image_height: OG_IMAGE_HEIGHT,
                image_alt: copy.title.to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: copy.title.to_string(),
                description: copy.social_description.to_string(),
                image,
            },
            robots: ROBOTS_DIRECTIVE.to_string(),
            google_site_verification: config.google_site_verification.clone(),
        }
    }
}

// ==================== Structured Data ====================

/// Schema.org JSON-LD documents for a landing page, in emission order:
/// Organization, LocalBusiness, WebSite, BreadcrumbList.
pub fn structured_data(locale: Locale, config: &Config) -> Vec<Value> {
    let is_id = locale == Locale::Id;
    let base = config.base_url.as_str();
    let logo = format!("{}/logo.png", base);

    let organization = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "alternateName": CONTACT_INFO.legal_name,
        "url": base,
        "logo": {
            "@type": "ImageObject",
            "url": logo,
            "width": 1200,
            "height": 1200,
        },
        "description": if is_id {
            "Partner rekrutmen strategis untuk UMKM. Menghubungkan perusahaan dengan talenta profesional."
        } else {
            "Strategic recruitment partner for SMEs. Connecting companies with professional talent."
        },
        "sameAs": [],
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": CONTACT_INFO.telephone,
            "contactType": "customer service",
            "areaServed": "ID",
            "availableLanguage": LocaleRegistry::get()
                .list()
                .iter()
                .map(|entry| entry.name)
                .collect::<Vec<_>>(),
        },
    });

    let offers: Vec<Value> = service_offers(is_id)
        .iter()
        .map(|(name, description)| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": name,
                    "description": description,
                },
            })
        })
        .collect();

    let local_business = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": SITE_NAME,
        "image": logo,
        "@id": base,
        "url": base,
        "telephone": CONTACT_INFO.telephone,
        "email": CONTACT_INFO.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "Jl Cilenggang II",
            "addressLocality": "Serpong",
            "addressRegion": "Banten",
            "postalCode": "15310",
            "addressCountry": "ID",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": -6.301912,
            "longitude": 106.654646,
        },
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            "opens": "09:00",
            "closes": "17:00",
        },
        "priceRange": "$$",
        "areaServed": {
            "@type": "Country",
            "name": "Indonesia",
        },
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": if is_id { "Layanan Rekrutmen" } else { "Recruitment Services" },
            "itemListElement": offers,
        },
    });

    let website = json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "url": base,
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{}/search?q={{search_term_string}}", base),
            },
            "query-input": "required name=search_term_string",
        },
        "inLanguage": locale.code(),
    });

    let breadcrumbs = json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": if is_id { "Beranda" } else { "Home" },
                "item": config.locale_url(locale),
            }
        ],
    });

    vec![organization, local_business, website, breadcrumbs]
}

/// Name and description of each catalog offer.
fn service_offers(is_id: bool) -> [(&'static str, &'static str); 4] {
    if is_id {
        [
            ("Headhunter Services", "Pencarian eksekutif dan talenta senior"),
            ("Executive Search", "Rekrutmen untuk posisi manajerial dan direksi"),
            ("Rekrutmen Umum", "Rekrutmen untuk posisi staff dan supervisor"),
            ("Mass Hiring", "Rekrutmen massal untuk kebutuhan besar"),
        ]
    } else {
        [
            ("Headhunter Services", "Executive search and senior talent acquisition"),
            ("Executive Search", "Recruitment for managerial and director positions"),
            ("General Recruitment", "Recruitment for staff and supervisor positions"),
            ("Mass Hiring", "Mass recruitment for large-scale needs"),
        ]
    }
}

// ==================== Sitemap & Robots ====================

/// XML sitemap with one entry per locale and `hreflang` alternates.
pub fn sitemap_xml(config: &Config, lastmod: NaiveDate) -> String {
    let registry = LocaleRegistry::get();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in registry.list() {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", config.locale_url(entry.locale)));
        for alternate in registry.list() {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                alternate.code,
                config.locale_url(alternate.locale)
            ));
        }
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod.format("%Y-%m-%d")));
        xml.push_str("    <changefreq>weekly</changefreq>\n");
        xml.push_str("    <priority>1.0</priority>\n");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(config: &Config) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        config.base_url
    )
}
