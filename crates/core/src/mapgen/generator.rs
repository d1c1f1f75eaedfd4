//! High-level maze generation orchestration that composes carving, border selection, and hazards.

use log::debug;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::grid::{Cell, Grid};
use crate::reachability::is_exit_reachable;

use super::border::select_borders;
use super::fallback::carve_guaranteed_path;
use super::hazards::{place_hazards, rollback_hazards};
use super::lattice::{Lattice, carve_lattice};
use super::model::{CarveStrategy, GeneratedMaze};
use super::seed::{CARVE_STREAM, HAZARD_STREAM, MazeRng, generate_runtime_seed};

pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig) -> Self {
        Self { config }
    }

    /// Validates the configuration, then runs the whole pipeline.
    ///
    /// Configuration errors are reported before any grid is allocated. A
    /// request without a seed draws a runtime seed, which is reported back in
    /// [`GeneratedMaze::seed`].
    pub fn generate(&self) -> Result<GeneratedMaze, MazeError> {
        self.config.validate()?;
        let seed = self.config.seed.unwrap_or_else(generate_runtime_seed);
        Ok(self.generate_with_seed(seed))
    }

    fn generate_with_seed(&self, seed: u64) -> GeneratedMaze {
        let mut rng = MazeRng::for_stream(seed, CARVE_STREAM);
        let grid = Grid::filled(self.config.height, self.config.width, Cell::Wall);
        let (grid, strategy) = carve(grid, &mut rng);

        if !self.config.place_hazards {
            return GeneratedMaze {
                grid,
                seed,
                strategy,
                hazard_budget: 0,
                hazards_placed: 0,
                hazards_rolled_back: 0,
            };
        }

        let mut hazard_rng = MazeRng::for_stream(seed, HAZARD_STREAM);
        let (grid, report) = place_hazards(grid, self.config.max_hazards, &mut hazard_rng);
        let (grid, hazards_rolled_back) = enforce_solvability(grid);

        GeneratedMaze {
            grid,
            seed,
            strategy,
            hazard_budget: report.budget,
            hazards_placed: report.placed,
            hazards_rolled_back,
        }
    }
}

fn carve(grid: Grid, rng: &mut MazeRng) -> (Grid, CarveStrategy) {
    let lattice = Lattice::for_grid(&grid);
    if lattice.is_degenerate() {
        debug!("lattice {lattice:?} too small, carving a guaranteed path");
        return (carve_guaranteed_path(grid, rng), CarveStrategy::GuaranteedPath);
    }

    mark_borders(carve_lattice(grid, rng), rng)
}

/// Places the entrance and exit on an already carved grid, carving a
/// guaranteed path instead when the corridors offer no usable border cells.
fn mark_borders(grid: Grid, rng: &mut MazeRng) -> (Grid, CarveStrategy) {
    match select_borders(grid, rng) {
        Ok(grid) => (grid, CarveStrategy::Lattice),
        Err(grid) => {
            debug!("no usable border candidates, carving a guaranteed path");
            (carve_guaranteed_path(grid, rng), CarveStrategy::GuaranteedPath)
        }
    }
}

/// Reverts every hazard if the exit is no longer reachable.
///
/// Each placement is validated on its own, so this only fires for grids whose
/// hazards arrived by some other route.
fn enforce_solvability(mut grid: Grid) -> (Grid, usize) {
    if is_exit_reachable(&grid) {
        return (grid, 0);
    }
    let removed = rollback_hazards(&mut grid);
    debug!("exit unreachable after hazard placement, rolled back {removed} hazards");
    (grid, removed)
}
