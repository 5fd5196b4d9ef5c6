use crate::i18n::Locale;
use serde::Serialize;

/// A navigation link pointing at a section anchor on the landing page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Localized site chrome: navigation, footer, and per-section labels
/// that are not part of a section's own content table.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleStrings {
    // ==================== Navigation ====================
    /// Header navigation items
    pub nav: &'static [NavItem],

    /// Footer navigation items (a subset of `nav`)
    pub footer_nav: &'static [NavItem],

    /// Accessible label for the mobile menu button
    pub menu_label: &'static str,

    /// Accessible label for the language toggle
    pub switch_language: &'static str,

    // ==================== Footer ====================
    /// Copyright holder shown after the year
    pub copyright_holder: &'static str,

    /// Rights line under the copyright
    pub rights_reserved: &'static str,

    // ==================== Section Labels ====================
    /// Eyebrow above the About section title
    pub about_eyebrow: &'static str,

    /// Label before each workflow step number
    pub workflow_step: &'static str,

    /// Hint shown above the embedded contact form
    pub contact_form_hint: &'static str,

    /// Prefix of the form provider attribution
    pub powered_by: &'static str,

    /// Title attribute of the contact form iframe
    pub contact_form_title: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub not_found_cta: &'static str,
}

impl LocaleStrings {
    /// Strings for a locale.
    pub fn for_locale(locale: Locale) -> &'static LocaleStrings {
        match locale {
            Locale::Id => &INDONESIAN_STRINGS,
            Locale::En => &ENGLISH_STRINGS,
        }
    }
}

// ==================== Indonesian Strings ====================

pub const INDONESIAN_STRINGS: LocaleStrings = LocaleStrings {
    nav: &[
        NavItem { label: "Beranda", anchor: "home" },
        NavItem { label: "Tentang", anchor: "about" },
        NavItem { label: "Layanan", anchor: "services" },
        NavItem { label: "Keunggulan", anchor: "advantages" },
        NavItem { label: "Tim", anchor: "team" },
        NavItem { label: "Klien", anchor: "clients" },
        NavItem { label: "Kontak", anchor: "contact" },
    ],
    footer_nav: &[
        NavItem { label: "Beranda", anchor: "home" },
        NavItem { label: "Tentang", anchor: "about" },
        NavItem { label: "Layanan", anchor: "services" },
        NavItem { label: "Tim", anchor: "team" },
        NavItem { label: "Kontak", anchor: "contact" },
    ],
    menu_label: "Buka menu",
    switch_language: "Ganti bahasa ke English",

    copyright_holder: "PT ACTALENT SOLUTIONS PARTNERS",
    rights_reserved: "Semua hak dilindungi undang-undang",

    about_eyebrow: "Tentang Kami",
    workflow_step: "Langkah",
    contact_form_hint: "Isi formulir di bawah ini dan tim kami akan menghubungi Anda.",
    powered_by: "Didukung oleh",
    contact_form_title: "Formulir Kontak",

    not_found_title: "Halaman tidak ditemukan",
    not_found_body: "Maaf, halaman yang Anda cari tidak tersedia.",
    not_found_cta: "Kembali ke beranda",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    nav: &[
        NavItem { label: "Home", anchor: "home" },
        NavItem { label: "About", anchor: "about" },
        NavItem { label: "Services", anchor: "services" },
        NavItem { label: "Advantages", anchor: "advantages" },
        NavItem { label: "Team", anchor: "team" },
        NavItem { label: "Clients", anchor: "clients" },
        NavItem { label: "Contact", anchor: "contact" },
    ],
    footer_nav: &[
        NavItem { label: "Home", anchor: "home" },
        NavItem { label: "About", anchor: "about" },
        NavItem { label: "Services", anchor: "services" },
        NavItem { label: "Team", anchor: "team" },
        NavItem { label: "Contact", anchor: "contact" },
    ],
    menu_label: "Open menu",
    switch_language: "Switch language to Bahasa Indonesia",

    copyright_holder: "PT ACTALENT SOLUTIONS PARTNERS",
    rights_reserved: "All rights reserved",

    about_eyebrow: "About Us",
    workflow_step: "Step",
    contact_form_hint: "Fill out the form below and our team will contact you.",
    powered_by: "Powered by",
    contact_form_title: "Contact Form",

    not_found_title: "Page not found",
    not_found_body: "Sorry, the page you are looking for does not exist.",
    not_found_cta: "Back to home",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale_selects_table() {
        assert_eq!(LocaleStrings::for_locale(Locale::Id).workflow_step, "Langkah");
        assert_eq!(LocaleStrings::for_locale(Locale::En).workflow_step, "Step");
    }

    #[test]
    fn test_nav_anchors_match_between_locales() {
        let id: Vec<_> = INDONESIAN_STRINGS.nav.iter().map(|item| item.anchor).collect();
        let en: Vec<_> = ENGLISH_STRINGS.nav.iter().map(|item| item.anchor).collect();
        assert_eq!(id, en);
    }

    #[test]
    fn test_footer_nav_is_subset_of_nav() {
        for strings in [&INDONESIAN_STRINGS, &ENGLISH_STRINGS] {
            for item in strings.footer_nav {
                assert!(strings.nav.iter().any(|nav| nav.anchor == item.anchor));
            }
        }
    }

    #[test]
    fn test_rights_line_is_localized() {
        assert_ne!(INDONESIAN_STRINGS.rights_reserved, ENGLISH_STRINGS.rights_reserved);
    }
}
