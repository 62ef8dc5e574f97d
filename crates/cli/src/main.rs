use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderfill_core::{
    load_config, run_pipeline, validate_config, HttpOrderSource, OrderSource, CONFIG_ENV_VAR,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("orderfill {}", VERSION);

    // Explicit config path, if any
    let config_path = std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from);

    let config = load_config(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("Failed to load config from {:?}", path),
        None => "Failed to load config".to_string(),
    })?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Orders endpoint: {}", config.api.base_url);
    info!(
        "Allocating '{}' (match policy: {:?})",
        config.allocation.target_product, config.allocation.match_policy
    );
    debug!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "Effective configuration"
    );

    let source = HttpOrderSource::new(&config.api).context("Failed to create order source")?;
    info!("Using order source: {}", source.name());

    let outcome = run_pipeline(&source, &config)
        .await
        .context("Order allocation failed")?;

    info!(
        "Wrote {:?}: {} of {} remaining, {} unfulfilled orders ({} orders over {} pages)",
        outcome.output_path,
        outcome.report.remaining_cookies,
        outcome.initial_inventory,
        outcome.report.unfulfilled_orders.len(),
        outcome.orders_fetched,
        outcome.pages_fetched
    );

    Ok(())
}
