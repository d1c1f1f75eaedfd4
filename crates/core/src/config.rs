//! Generation request parameters.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

pub const MIN_DIMENSION: usize = 5;
pub const DEFAULT_DIMENSION: usize = 21;
pub const DEFAULT_MAX_HAZARDS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub height: usize,
    pub width: usize,
    /// Seed for every random draw. `None` asks the generator for a runtime seed.
    pub seed: Option<u64>,
    pub place_hazards: bool,
    pub max_hazards: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_DIMENSION,
            width: DEFAULT_DIMENSION,
            seed: None,
            place_hazards: true,
            max_hazards: DEFAULT_MAX_HAZARDS,
        }
    }
}

impl MazeConfig {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hazards(mut self, place_hazards: bool) -> Self {
        self.place_hazards = place_hazards;
        self
    }

    pub fn with_max_hazards(mut self, max_hazards: usize) -> Self {
        self.max_hazards = max_hazards;
        self
    }

    pub fn validate(&self) -> Result<(), MazeError> {
        if self.height < MIN_DIMENSION || self.width < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions { height: self.height, width: self.width });
        }
        Ok(())
    }
}
