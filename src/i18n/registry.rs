//! Locale registry: single source of truth for locale metadata.
//!
//! The registry is initialized once on first access via `OnceLock` and is
//! immutable afterwards.

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// Locale code as used in URLs and the `locale` cookie (e.g., "id")
    pub code: &'static str,

    /// English name of the language (e.g., "Indonesian")
    pub name: &'static str,

    /// Native name of the language (e.g., "Bahasa Indonesia")
    pub native_name: &'static str,

    /// Region-qualified tag used in `hreflang` alternates (e.g., "id-ID")
    pub hreflang: &'static str,

    /// Open Graph locale (e.g., "id_ID")
    pub og_locale: &'static str,

    /// Whether this is the fallback locale (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|entry| entry.code == code)
    }

    /// Get the configuration for a locale.
    ///
    /// Every `Locale` variant has a registry entry; the lookup falls back to
    /// the default entry only if that invariant is ever broken.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|entry| entry.locale == locale)
            .unwrap_or_else(|| self.default_config())
    }

    /// All locale configurations, in publication order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// The configuration of the fallback locale.
    pub fn default_config(&self) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|entry| entry.is_default)
            .unwrap_or(&self.locales[0])
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> Locale {
        self.default_config().locale
    }

    /// Check if a code names a supported locale.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations: Indonesian (default) and English.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::Id,
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            hreflang: "id-ID",
            og_locale: "id_ID",
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::En,
            code: "en",
            name: "English",
            native_name: "English",
            hreflang: "en-US",
            og_locale: "en_US",
            is_default: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_indonesian() {
        let config = LocaleRegistry::get().get_by_code("id").unwrap();
        assert_eq!(config.locale, Locale::Id);
        assert_eq!(config.hreflang, "id-ID");
        assert_eq!(config.og_locale, "id_ID");
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LocaleRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.hreflang, "en-US");
        assert_eq!(config.og_locale, "en_US");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_exactly_one_default() {
        let defaults = LocaleRegistry::get()
            .list()
            .iter()
            .filter(|entry| entry.is_default)
            .count();
        assert_eq!(defaults, 1);
    }

    #[test]
    fn test_every_locale_has_matching_entry() {
        let registry = LocaleRegistry::get();
        for locale in Locale::ALL {
            let config = registry.config(locale);
            assert_eq!(config.locale, locale);
            assert_eq!(config.code, locale.code());
        }
    }

    #[test]
    fn test_is_supported() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_supported("id"));
        assert!(registry.is_supported("en"));
        assert!(!registry.is_supported("EN"));
        assert!(!registry.is_supported(""));
    }
}
