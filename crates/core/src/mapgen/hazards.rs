//! Hazard placement that keeps the exit reachable under the hazard-tolerance rule.

use log::trace;

use crate::grid::{Cell, Grid};
use crate::reachability::is_exit_reachable;

use super::seed::MazeRng;

const MIN_ATTEMPT_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HazardReport {
    /// Target drawn uniformly from `0..=max_hazards`.
    pub budget: usize,
    pub placed: usize,
    pub attempts: usize,
}

/// Turns up to a random budget of `Road` cells into hazards, one at a time.
///
/// Candidates are shuffled once and consumed back to front; each one is tried
/// at most once. A tentative hazard that leaves the exit unreachable is
/// reverted and never retried. Falling short of the budget is not an error.
pub fn place_hazards(mut grid: Grid, max_hazards: usize, rng: &mut MazeRng) -> (Grid, HazardReport) {
    let budget = rng.range_inclusive(0, max_hazards);

    let mut candidates = grid.positions_of(Cell::Road);
    rng.shuffle(&mut candidates);
    let attempt_limit = MIN_ATTEMPT_LIMIT.max(candidates.len() * 2);

    let mut report = HazardReport { budget, ..HazardReport::default() };
    while report.placed < budget && report.attempts < attempt_limit {
        let Some(pos) = candidates.pop() else {
            break;
        };
        report.attempts += 1;

        grid.set(pos, Cell::Hazard);
        if is_exit_reachable(&grid) {
            report.placed += 1;
            trace!("hazard kept at {pos:?} ({}/{budget})", report.placed);
        } else {
            grid.set(pos, Cell::Road);
            trace!("hazard at {pos:?} would block the exit, reverted");
        }
    }

    (grid, report)
}

/// Reverts every hazard back to `Road`, returning how many were removed.
pub fn rollback_hazards(grid: &mut Grid) -> usize {
    grid.replace_all(Cell::Hazard, Cell::Road)
}
