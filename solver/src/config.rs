use std::path::Path;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::crop::DEFAULT_BLANK_RATIO;
use crate::error::{Result, SolveError};

/// Tunables for turning an image into a solved maze. Every field has a default, so a config
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Pixels with a luma value above this are walkable
    pub threshold: u8,
    /// Rows and columns with at least this share of walkable cells are cropped as margin
    pub blank_ratio: f64,
    /// Number of walkable cells to skip on the first and last row before picking an endpoint
    pub endpoint_skip: usize,
    pub path_color: [u8; 3],
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: 128,
            blank_ratio: DEFAULT_BLANK_RATIO,
            endpoint_skip: 2,
            path_color: [255, 0, 0],
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| SolveError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SolveError::InvalidConfig(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.blank_ratio > 0.0 && self.blank_ratio <= 1.0) {
            return Err(SolveError::InvalidConfig(format!(
                "blank_ratio must be in (0, 1], got {}",
                self.blank_ratio
            )));
        }
        Ok(())
    }

    pub fn path_color(&self) -> Rgb<u8> {
        Rgb(self.path_color)
    }
}
