//! Maze generation split into carving, border selection, and hazard placement stages.

pub mod border;
pub mod fallback;
pub mod hazards;
pub mod lattice;
pub mod model;
pub mod seed;

mod generator;

pub use border::{BorderCandidate, border_candidates, select_borders};
pub use fallback::carve_guaranteed_path;
pub use generator::MazeGenerator;
pub use hazards::{HazardReport, place_hazards, rollback_hazards};
pub use lattice::{Lattice, carve_lattice};
pub use model::{CarveStrategy, GeneratedMaze};
pub use seed::{MazeRng, generate_runtime_seed};

use crate::config::MazeConfig;
use crate::error::MazeError;

pub fn generate_maze(config: &MazeConfig) -> Result<GeneratedMaze, MazeError> {
    MazeGenerator::new(config.clone()).generate()
}
