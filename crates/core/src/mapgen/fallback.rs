//! Guaranteed single-corridor carving for grids too small for the lattice carver.

use crate::grid::{Cell, Grid, Pos};

use super::seed::MazeRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

const MIN_SIDE: usize = 3;

const SIDES: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

/// Carves one elbow-shaped corridor between random points on two distinct sides
/// and marks those points as entrance and exit.
///
/// Border points are drawn away from the corners, so both interior anchors and
/// the whole elbow stay strictly inside the border ring. Grids smaller than
/// 3x3 have no interior and are returned untouched.
pub fn carve_guaranteed_path(mut grid: Grid, rng: &mut MazeRng) -> Grid {
    if grid.height() < MIN_SIDE || grid.width() < MIN_SIDE {
        return grid;
    }

    let first_side = SIDES[rng.below(SIDES.len())];
    let remaining: Vec<Side> = SIDES.into_iter().filter(|&side| side != first_side).collect();
    let second_side = remaining[rng.below(remaining.len())];

    let entrance = border_point(&grid, first_side, rng);
    let exit = border_point(&grid, second_side, rng);

    let from = step_inside(&grid, entrance);
    let to = step_inside(&grid, exit);

    let corner = if rng.coin() { Pos::new(to.y, from.x) } else { Pos::new(from.y, to.x) };
    carve_straight(&mut grid, from, corner);
    carve_straight(&mut grid, corner, to);

    grid.set(entrance, Cell::Entrance);
    grid.set(exit, Cell::Exit);
    grid.set(from, Cell::Road);
    grid.set(to, Cell::Road);
    grid
}

fn border_point(grid: &Grid, side: Side, rng: &mut MazeRng) -> Pos {
    let last_y = grid.height() as i32 - 1;
    let last_x = grid.width() as i32 - 1;
    match side {
        Side::Top => Pos::new(0, 1 + rng.below(grid.width() - 2) as i32),
        Side::Bottom => Pos::new(last_y, 1 + rng.below(grid.width() - 2) as i32),
        Side::Left => Pos::new(1 + rng.below(grid.height() - 2) as i32, 0),
        Side::Right => Pos::new(1 + rng.below(grid.height() - 2) as i32, last_x),
    }
}

fn step_inside(grid: &Grid, pos: Pos) -> Pos {
    let last_y = grid.height() as i32 - 1;
    let last_x = grid.width() as i32 - 1;
    if pos.y == 0 {
        Pos::new(1, pos.x)
    } else if pos.y == last_y {
        Pos::new(last_y - 1, pos.x)
    } else if pos.x == 0 {
        Pos::new(pos.y, 1)
    } else {
        Pos::new(pos.y, last_x - 1)
    }
}

/// Carves every cell on the axis-aligned segment `from..=to`.
fn carve_straight(grid: &mut Grid, from: Pos, to: Pos) {
    let dy = (to.y - from.y).signum();
    let dx = (to.x - from.x).signum();
    let mut pos = from;
    grid.set(pos, Cell::Road);
    while pos != to {
        pos = pos.offset(dy, dx);
        grid.set(pos, Cell::Road);
    }
}
