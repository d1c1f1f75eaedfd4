//! Rectangular maze generation: spanning-tree carving, far-apart entrance and
//! exit selection, and hazard placement that never breaks solvability.

pub mod config;
pub mod error;
pub mod grid;
pub mod mapgen;
pub mod reachability;

pub use config::{MIN_DIMENSION, MazeConfig};
pub use error::MazeError;
pub use grid::{Cell, Grid, Pos};
pub use mapgen::{CarveStrategy, GeneratedMaze, MazeGenerator, generate_maze};
pub use reachability::{HAZARD_TOLERANCE, RouteSummary, find_route, is_exit_reachable};
