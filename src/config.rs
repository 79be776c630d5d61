use crate::error::{MapError, Result};
use crate::random::{Mt19937, DEFAULT_SEED};
use rand::SeedableRng;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 1;
pub const DEFAULT_OUTPUT: &str = "random_map.png";
/// Output location used when the map is generated from inside a scripts directory
pub const ALT_OUTPUT: &str = "../images/random_map.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Independent uniform channels
    Uniform,
    /// Radius/angle samples mapped through sine and cosine
    Polar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    pub variant: Variant,
    /// `None` seeds the generator from OS entropy
    pub seed: Option<u64>,
    pub output: PathBuf,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            variant: Variant::Polar,
            seed: Some(DEFAULT_SEED),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl MapConfig {
    /// Unseeded uniform map, different on every run.
    pub fn uniform() -> Self {
        MapConfig {
            variant: Variant::Uniform,
            seed: None,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn rng(&self) -> Mt19937 {
        match self.seed {
            Some(seed) => Mt19937::new(seed),
            None => Mt19937::from_entropy(),
        }
    }
}
