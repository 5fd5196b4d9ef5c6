use actalent_site::{config, content, i18n, server};
use anyhow::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("actalent_site=info".parse()?),
        )
        .init();

    info!("Starting ACTALENT site");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Serving {} with static files from {}",
        config.base_url,
        config.static_dir.display()
    );

    // Content drift between locales is logged, not fatal
    let report = i18n::ContentValidator::validate(
        content::bundle(i18n::Locale::Id),
        content::bundle(i18n::Locale::En),
    );
    for error in &report.errors {
        warn!("Content parity error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Content parity warning: {}", warning);
    }
    if report.is_clean() {
        info!("Content bundles are in parity");
    }

    server::serve(config).await
}
