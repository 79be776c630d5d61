pub mod config;
pub mod error;
pub mod output;
pub mod pattern;
pub mod random;
pub mod utils;

use config::MapConfig;
use error::Result;
use log::info;

/// Generate the map described by `config` and save it to `config.output`.
pub fn run(config: &MapConfig) -> Result<()> {
    config.validate()?;
    let mut rng = config.rng();

    info!(
        "Generating {:?} map ({}x{}, seed {:?})...",
        config.variant, config.width, config.height, config.seed
    );
    let img = pattern::generate_map(config, &mut rng);

    info!("Saving image...");
    output::save_png(&img, &config.output)?;
    info!("Image saved as {}", config.output.display());
    Ok(())
}
