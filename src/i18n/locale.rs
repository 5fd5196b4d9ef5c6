//! Locale type: the closed set of site locales.
//!
//! The site is published in exactly two locales. Indonesian is the primary
//! market and the default; English is the secondary market.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Indonesian (`id`)
    Id,
    /// English (`en`)
    En,
}

impl Locale {
    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 2] = [Locale::Id, Locale::En];

    /// Create a Locale from a locale code string.
    ///
    /// # Arguments
    /// * `code` - The locale code (e.g., "id", "en")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is a supported locale
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Locale> {
        match Self::parse(code) {
            Some(locale) => Ok(locale),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Exact, case-sensitive match against the supported codes.
    ///
    /// This is the check used for cookie values and path segments, where only
    /// the canonical lowercase code is accepted.
    pub fn parse(code: &str) -> Option<Locale> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Case-insensitive match of a language primary subtag (e.g. "EN", "id").
    pub fn from_primary_subtag(subtag: &str) -> Option<Locale> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(subtag))
    }

    /// The locale code (e.g., "id", "en").
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    /// Get the full locale configuration from the registry.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(*self)
    }

    /// English name of the locale (e.g., "Indonesian").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the locale (e.g., "Bahasa Indonesia").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// The other supported locale. Used for the language toggle.
    pub const fn other(&self) -> Locale {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        LocaleRegistry::get().default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
