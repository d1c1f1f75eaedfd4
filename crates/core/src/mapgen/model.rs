//! Public data models for generated mazes.

use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarveStrategy {
    /// Randomized depth-first spanning tree over the cell lattice.
    Lattice,
    /// Single elbow corridor between two border points.
    GuaranteedPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMaze {
    pub grid: Grid,
    /// Seed every random draw was derived from; replays the same maze.
    pub seed: u64,
    pub strategy: CarveStrategy,
    pub hazard_budget: usize,
    pub hazards_placed: usize,
    /// Hazards reverted by the final solvability check.
    pub hazards_rolled_back: usize,
}

impl GeneratedMaze {
    pub fn hazard_count(&self) -> usize {
        self.hazards_placed - self.hazards_rolled_back
    }
}
