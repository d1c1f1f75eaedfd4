//! Entrance-to-exit solvability checks under the bounded hazard-tolerance rule.
//! This module exists so carving, hazard placement, and callers share one definition of "solvable".
//! It does not own any mutation of the grid.

use std::collections::VecDeque;

use crate::grid::{Cell, Grid, Pos};

/// Maximum number of hazard cells a single route may cross.
pub const HAZARD_TOLERANCE: usize = 2;

const TOLERANCE_LEVELS: usize = HAZARD_TOLERANCE + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSummary {
    /// Moves taken from the entrance to the exit.
    pub steps: u32,
    pub hazards_crossed: usize,
}

pub fn is_exit_reachable(grid: &Grid) -> bool {
    find_route(grid).is_some()
}

/// Breadth-first search over `(pos, hazards_crossed)` states.
///
/// Each state is visited at most once, so a cell can be revisited later at a
/// different tolerance level. Returns `None` when the exit cannot be reached
/// without crossing more than [`HAZARD_TOLERANCE`] hazards, or when the grid
/// has no entrance or no exit.
pub fn find_route(grid: &Grid) -> Option<RouteSummary> {
    let start = grid.find(Cell::Entrance)?;
    let goal = grid.find(Cell::Exit)?;

    let width = grid.width();
    let state_index = |pos: Pos, crossed: usize| {
        ((pos.y as usize) * width + pos.x as usize) * TOLERANCE_LEVELS + crossed
    };

    let mut distance = vec![None::<u32>; grid.width() * grid.height() * TOLERANCE_LEVELS];
    distance[state_index(start, 0)] = Some(0);
    let mut queue = VecDeque::from([(start, 0_usize)]);

    while let Some((pos, crossed)) = queue.pop_front() {
        let steps = distance[state_index(pos, crossed)].unwrap_or(0);
        if pos == goal {
            return Some(RouteSummary { steps, hazards_crossed: crossed });
        }

        for next in grid.neighbors(pos) {
            let cell = grid.cell(next);
            if !cell.is_passable() {
                continue;
            }
            let next_crossed = crossed + usize::from(cell == Cell::Hazard);
            if next_crossed > HAZARD_TOLERANCE {
                continue;
            }
            let slot = &mut distance[state_index(next, next_crossed)];
            if slot.is_none() {
                *slot = Some(steps + 1);
                queue.push_back((next, next_crossed));
            }
        }
    }

    None
}

/// Plain BFS distances over `Road` cells from `source`, row-major, `None` where unreachable.
pub fn corridor_distances(grid: &Grid, source: Pos) -> Vec<Option<u32>> {
    let width = grid.width();
    let index = |pos: Pos| (pos.y as usize) * width + pos.x as usize;

    let mut distances = vec![None; grid.width() * grid.height()];
    if !grid.in_bounds(source) {
        return distances;
    }
    distances[index(source)] = Some(0);
    let mut queue = VecDeque::from([(source, 0_u32)]);

    while let Some((pos, distance)) = queue.pop_front() {
        for next in grid.neighbors(pos) {
            if grid.cell(next) != Cell::Road || distances[index(next)].is_some() {
                continue;
            }
            distances[index(next)] = Some(distance + 1);
            queue.push_back((next, distance + 1));
        }
    }

    distances
}
