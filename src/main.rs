//! Admin Console - Main Entry Point
//!
//! Users and posts management backed by searchable, sortable, paginated tables.

use admin_console::app::application::run_app;
use admin_console::domain::config::AppConfig;
use admin_console::domain::seed::SeedData;
use admin_console::utils::config_store;
use anyhow::Context;

fn load_settings() -> anyhow::Result<AppConfig> {
    let path = config_store::settings_path()?;
    if !path.exists() {
        let config = AppConfig::default();
        config_store::save_config(&config)
            .with_context(|| format!("writing default settings to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote default settings");
        return Ok(config);
    }
    Ok(config_store::load_config()?)
}

fn load_seed(config: &AppConfig) -> SeedData {
    let Some(path) = config.seed_file.as_deref() else {
        return SeedData::sample();
    };
    match SeedData::load(path) {
        Ok(seed) => {
            tracing::info!(
                path = %path.display(),
                users = seed.users.len(),
                posts = seed.posts.len(),
                "Loaded seed data"
            );
            seed
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load seed data, using sample set");
            SeedData::sample()
        }
    }
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Admin Console...");

    let config = load_settings().unwrap_or_else(|err| {
        tracing::warn!(error = %format!("{err:#}"), "Failed to load settings, using defaults");
        AppConfig::default()
    });
    let seed = load_seed(&config);

    // Run the GPUI application
    run_app(config, seed);
}
