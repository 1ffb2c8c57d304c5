//! Grimoire Engine - Main entry point.

use grimoire_engine::config::EngineConfig;
use grimoire_engine::seed::SeedFile;
use grimoire_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = EngineConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Grimoire Engine");

    let app = App::in_memory(&config);
    tracing::info!(
        admins = config.admin_user_ids.len(),
        "Registered admin users"
    );

    if let Some(path) = &config.seed_path {
        tracing::info!(path = %path.display(), "Loading seed file");
        let seed = SeedFile::load(path)?;
        app.seed(seed).await?;
    }

    let summary = app.summary().await?;
    tracing::info!(
        classes = summary.classes,
        races = summary.races,
        subraces = summary.subraces,
        weapon_kinds = summary.weapon_kinds,
        weapon_properties = summary.weapon_properties,
        weapons = summary.weapons,
        feats = summary.feats,
        "Catalogue ready"
    );

    Ok(())
}
