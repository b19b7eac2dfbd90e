//! CGX - headless driver for the graphics exercise cores
//!
//! Runs every configured exercise once and logs what it produced. Missing or
//! malformed data files are fatal.

use std::process::ExitCode;

use cgx::config::AppConfig;
use cgx::systems::{ColorSystem, LorenzSystem, RunError, SceneSystem, TextureSystem, TraceSystem};
use cgx_core::AssetCache;

fn run(config: &AppConfig) -> Result<(), RunError> {
    let mut cache = AssetCache::new();

    LorenzSystem::run(&config.lorenz)?;
    ColorSystem::run(&config.color);
    TraceSystem::run(&config.trace, &mut cache)?;
    TextureSystem::run(&config.texture, &mut cache)?;
    SceneSystem::run(&config.view, &config.sphere)?;

    Ok(())
}

fn main() -> ExitCode {
    // Load configuration before logging so the configured level applies
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting CGX");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
