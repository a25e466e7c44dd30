//! persistence-config checker entry point.
//!
//! Loads the persistence configuration, resolves it, and optionally prints
//! the resolved document. Exits non-zero on any configuration error.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use persistence_config::config::{CheckerConfig, LogFormat};
use persistence_config::persistence::PersistenceConfig;

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = CheckerConfig::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    tracing::info!(path = %config.config_path.display(), "checking persistence config");

    let persistence = PersistenceConfig::from_path(&config.config_path)?;
    let resolved = persistence
        .resolve()
        .context("persistence config is invalid")?;
    let store_type = resolved.default_store_type()?;
    tracing::info!(
        default_store = %resolved.default_store,
        %store_type,
        advanced_visibility = resolved.has_advanced_visibility(),
        "persistence config ok"
    );

    if config.print_resolved {
        let json = serde_json::to_string_pretty(&resolved)
            .context("failed to serialize resolved config")?;
        println!("{json}");
    }

    Ok(())
}
