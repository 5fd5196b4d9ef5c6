//! Render binary - writes the landing pages and SEO files to disk without
//! starting the server
//!
//! Usage:
//!   cargo run --bin render                          # Render into dist/
//!   cargo run --bin render -- --out public          # Render into another directory
//!   cargo run --bin render -- --reduced-motion      # Render without animation attributes
//!
//! Optional environment variables (see `Config::from_env`):
//! - SITE_BASE_URL (defaults to https://actalent.id)
//! - DEFAULT_LOCALE (defaults to id)
//! - GOOGLE_SITE_VERIFICATION

use actalent_site::animation::MotionProfile;
use actalent_site::config::Config;
use actalent_site::content::bundle;
use actalent_site::i18n::{ContentValidator, Locale};
use actalent_site::render::{render_not_found, render_page, PageContext};
use actalent_site::seo::{robots_txt, sitemap_xml};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `contents` to `dir/relative`, creating parent directories.
fn write_file(dir: &Path, relative: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("actalent_site=info".parse()?),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let reduced_motion = args.iter().any(|arg| arg == "--reduced-motion");
    let out_dir = args
        .iter()
        .position(|arg| arg == "--out")
        .and_then(|index| args.get(index + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let profile = MotionProfile {
        mobile: false,
        reduced_motion,
    };

    let report = ContentValidator::validate(bundle(Locale::Id), bundle(Locale::En));
    if report.has_errors() {
        anyhow::bail!("Content bundles are out of parity: {:?}", report.errors);
    }

    let mut written = Vec::new();
    for locale in Locale::ALL {
        let page = render_page(&PageContext::new(locale, &config, profile))?;
        written.push(write_file(&out_dir, &format!("{}/index.html", locale.code()), &page)?);
    }
    written.push(write_file(
        &out_dir,
        "404.html",
        &render_not_found(config.default_locale)?,
    )?);
    written.push(write_file(
        &out_dir,
        "sitemap.xml",
        &sitemap_xml(&config, Utc::now().date_naive()),
    )?);
    written.push(write_file(&out_dir, "robots.txt", &robots_txt(&config))?);

    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                        RENDERED SITE                              ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Base URL: {:55}║", config.base_url);
    println!("║ Reduced motion: {:49}║", reduced_motion);
    println!("║ Parity warnings: {:<48}║", report.warnings.len());
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();
    for path in &written {
        println!("💾 {}", path.display());
    }
    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }
    println!();

    Ok(())
}
