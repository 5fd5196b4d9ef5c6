use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use axum::http::StatusCode;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Public site
    pub base_url: String,
    pub static_dir: PathBuf,

    // Locale negotiation
    pub default_locale: Locale,
    pub redirect_status: StatusCode,

    // SEO
    pub google_site_verification: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", value))?,
                Err(_) => 8080,
            },

            // Public site
            base_url: std::env::var("SITE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://actalent.id".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),

            // Locale negotiation
            default_locale: match std::env::var("DEFAULT_LOCALE") {
                Ok(code) => Locale::from_code(&code)
                    .with_context(|| format!("DEFAULT_LOCALE must be 'id' or 'en', got '{}'", code))?,
                Err(_) => Locale::default(),
            },
            redirect_status: match std::env::var("LOCALE_REDIRECT_STATUS") {
                Ok(value) => parse_redirect_status(&value)?,
                Err(_) => StatusCode::FOUND,
            },

            // SEO
            google_site_verification: std::env::var("GOOGLE_SITE_VERIFICATION")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute URL of the landing page for `locale`, with trailing slash.
    pub fn locale_url(&self, locale: Locale) -> String {
        format!("{}/{}/", self.base_url, locale.code())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "https://actalent.id".to_string(),
            static_dir: PathBuf::from("public"),
            default_locale: Locale::default(),
            redirect_status: StatusCode::FOUND,
            google_site_verification: None,
        }
    }
}

/// Parse the status used for locale redirects. Only redirect codes are accepted.
fn parse_redirect_status(value: &str) -> Result<StatusCode> {
    let code: u16 = value
        .trim()
        .parse()
        .with_context(|| format!("LOCALE_REDIRECT_STATUS is not a number: {}", value))?;

    match code {
        301 | 302 | 303 | 307 | 308 => Ok(StatusCode::from_u16(code)?),
        other => bail!("LOCALE_REDIRECT_STATUS must be a redirect status, got {}", other),
    }
}
