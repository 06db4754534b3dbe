//! polychora4d - headless 4D polytope viewer
//!
//! Loads configuration, simulates the configured shape for a fixed number of
//! ticks and logs what its 3D reduction looks like along the way.

use std::process::ExitCode;

use polychora4d::config::AppConfig;
use polychora4d::error::AppError;
use polychora4d::systems::SimulationSystem;

fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut simulation = SimulationSystem::from_config(config)?;
    simulation.run(config.simulation.ticks)?;
    Ok(())
}

fn main() -> ExitCode {
    // Load configuration before logging so its level can be used
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting polychora4d");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
