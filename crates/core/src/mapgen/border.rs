//! Entrance and exit selection along the carved corridor topology.

use crate::grid::{Cell, Grid, Pos};
use crate::reachability::corridor_distances;

use super::seed::MazeRng;

/// A border cell paired with its single inward neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderCandidate {
    pub border: Pos,
    pub inner: Pos,
}

/// Border cells whose inward neighbor is a carved `Road`, top/bottom pairs per
/// column first, then left/right pairs per row.
pub fn border_candidates(grid: &Grid) -> Vec<BorderCandidate> {
    let height = grid.height() as i32;
    let width = grid.width() as i32;
    let mut candidates = Vec::new();

    let mut consider = |border: Pos, inner: Pos| {
        if grid.in_bounds(border) && grid.in_bounds(inner) && grid.cell(inner) == Cell::Road {
            candidates.push(BorderCandidate { border, inner });
        }
    };

    for x in 0..width {
        consider(Pos::new(0, x), Pos::new(1, x));
        consider(Pos::new(height - 1, x), Pos::new(height - 2, x));
    }
    for y in 0..height {
        consider(Pos::new(y, 0), Pos::new(y, 1));
        consider(Pos::new(y, width - 1), Pos::new(y, width - 2));
    }

    candidates
}

/// Marks an entrance and exit on the border that are far apart along the corridors.
///
/// Double-BFS eccentricity search: from a random candidate find the farthest
/// candidate `a1`, then the candidate farthest from `a1` is `a2`. When the
/// search cannot produce two distinct border cells, two distinct candidates are
/// drawn at random instead. Returns the grid unchanged as `Err` when fewer
/// than two distinct border cells are eligible, so the caller can fall back to
/// the guaranteed-path carver.
pub fn select_borders(mut grid: Grid, rng: &mut MazeRng) -> Result<Grid, Grid> {
    let candidates = border_candidates(&grid);
    if distinct_border_count(&candidates) < 2 {
        return Err(grid);
    }

    let Some((entrance, exit)) =
        farthest_pair(&grid, &candidates, rng).or_else(|| random_pair(&candidates, rng))
    else {
        return Err(grid);
    };

    grid.set(entrance, Cell::Entrance);
    grid.set(exit, Cell::Exit);
    Ok(grid)
}

fn farthest_pair(
    grid: &Grid,
    candidates: &[BorderCandidate],
    rng: &mut MazeRng,
) -> Option<(Pos, Pos)> {
    let start = rng.choose(candidates)?.inner;
    let first = farthest_inner(grid, candidates, start)?;
    let second = farthest_inner(grid, candidates, first)?;

    let entrance = border_for_inner(candidates, first)?;
    let exit = border_for_inner(candidates, second)?;
    (entrance != exit).then_some((entrance, exit))
}

/// Inner point of the first candidate with the greatest corridor distance from `source`.
fn farthest_inner(grid: &Grid, candidates: &[BorderCandidate], source: Pos) -> Option<Pos> {
    let distances = corridor_distances(grid, source);
    let width = grid.width();

    let mut best: Option<(Pos, Option<u32>)> = None;
    for candidate in candidates {
        let inner = candidate.inner;
        let distance = distances[(inner.y as usize) * width + inner.x as usize];
        if best.is_none_or(|(_, best_distance)| distance > best_distance) {
            best = Some((inner, distance));
        }
    }
    best.map(|(inner, _)| inner)
}

fn border_for_inner(candidates: &[BorderCandidate], inner: Pos) -> Option<Pos> {
    candidates.iter().find(|candidate| candidate.inner == inner).map(|candidate| candidate.border)
}

fn random_pair(candidates: &[BorderCandidate], rng: &mut MazeRng) -> Option<(Pos, Pos)> {
    let entrance = rng.choose(candidates)?.border;
    let others: Vec<Pos> = candidates
        .iter()
        .map(|candidate| candidate.border)
        .filter(|&border| border != entrance)
        .collect();
    let exit = *rng.choose(&others)?;
    Some((entrance, exit))
}

fn distinct_border_count(candidates: &[BorderCandidate]) -> usize {
    let mut borders: Vec<Pos> = candidates.iter().map(|candidate| candidate.border).collect();
    borders.sort_unstable();
    borders.dedup();
    borders.len()
}
