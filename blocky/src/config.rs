use std::path::Path;

use anyhow::{bail, Context};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::block::valid_geometry;
use crate::Block;

/// The parameters for generating a random board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// The side length of the board. Must be divisible by `2^max_depth`.
    pub size: u32,
    pub max_depth: u8,
    /// How likely each block above the maximum depth is subdivided.
    pub split_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 512,
            max_depth: 4,
            split_probability: 0.6,
        }
    }
}

impl BoardConfig {
    /// Reads a config from a JSON file. Missing fields take their default value.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read board config '{}'", path.display()))?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !valid_geometry(self.size, self.max_depth) {
            bail!(
                "Board size {} is not divisible into {} levels of quadrants",
                self.size,
                self.max_depth
            );
        }
        if !(0.0..=1.0).contains(&self.split_probability) {
            bail!(
                "Split probability {} is not between 0 and 1",
                self.split_probability
            );
        }
        Ok(())
    }

    /// Generates a random board with its upper left corner at the origin.
    pub fn build_board(&self, rng: &mut impl Rng) -> anyhow::Result<Block> {
        self.validate()?;
        Ok(Block::build(
            (0, 0),
            self.size,
            self.max_depth,
            self.split_probability,
            rng,
        ))
    }
}
