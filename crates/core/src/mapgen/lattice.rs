//! Spanning-tree corridor carving over the odd-indexed cell lattice.

use crate::grid::{Cell, Grid, Pos};

use super::seed::MazeRng;

/// Coarse lattice over a grid: lattice cell `(cy, cx)` sits on grid cell `(2cy+1, 2cx+1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    pub height: usize,
    pub width: usize,
}

impl Lattice {
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            height: grid.height().saturating_sub(1) / 2,
            width: grid.width().saturating_sub(1) / 2,
        }
    }

    /// The lattice is too small for real choice points below 2x2.
    pub fn is_degenerate(self) -> bool {
        self.height <= 1 || self.width <= 1
    }

    fn center(cell: LatticeCell) -> Pos {
        Pos { y: (2 * cell.y + 1) as i32, x: (2 * cell.x + 1) as i32 }
    }

    fn index(self, cell: LatticeCell) -> usize {
        cell.y * self.width + cell.x
    }

    fn neighbors(self, cell: LatticeCell) -> impl Iterator<Item = LatticeCell> {
        let up = (cell.y > 0).then(|| LatticeCell { y: cell.y - 1, x: cell.x });
        let down = (cell.y + 1 < self.height).then(|| LatticeCell { y: cell.y + 1, x: cell.x });
        let left = (cell.x > 0).then(|| LatticeCell { y: cell.y, x: cell.x - 1 });
        let right = (cell.x + 1 < self.width).then(|| LatticeCell { y: cell.y, x: cell.x + 1 });
        [up, down, left, right].into_iter().flatten()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LatticeCell {
    y: usize,
    x: usize,
}

/// Carves a randomized depth-first spanning tree over the lattice.
///
/// Every lattice center becomes `Road`, and exactly one wall between each
/// parent/child pair is opened, so any two corridor cells are joined by a
/// single simple path. Uses an explicit stack; depth is bounded by the
/// lattice cell count.
pub fn carve_lattice(mut grid: Grid, rng: &mut MazeRng) -> Grid {
    let lattice = Lattice::for_grid(&grid);
    if lattice.height == 0 || lattice.width == 0 {
        return grid;
    }

    for y in 0..lattice.height {
        for x in 0..lattice.width {
            grid.set(Lattice::center(LatticeCell { y, x }), Cell::Road);
        }
    }

    let mut visited = vec![false; lattice.height * lattice.width];
    let start = LatticeCell { y: rng.below(lattice.height), x: rng.below(lattice.width) };
    visited[lattice.index(start)] = true;
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let unvisited: Vec<LatticeCell> =
            lattice.neighbors(current).filter(|next| !visited[lattice.index(*next)]).collect();

        let Some(&next) = rng.choose(&unvisited) else {
            stack.pop();
            continue;
        };

        let from = Lattice::center(current);
        let to = Lattice::center(next);
        grid.set(Pos { y: (from.y + to.y) / 2, x: (from.x + to.x) / 2 }, Cell::Road);

        visited[lattice.index(next)] = true;
        stack.push(next);
    }

    grid
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    fn road_cells_connected(grid: &Grid) -> bool {
        let roads = grid.positions_of(Cell::Road);
        let Some(&start) = roads.first() else {
            return true;
        };
        let mut seen = vec![start];
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in grid.neighbors(pos) {
                if grid.cell(next) == Cell::Road && !seen.contains(&next) {
                    seen.push(next);
                    open.push_back(next);
                }
            }
        }
        seen.len() == roads.len()
    }

    #[test]
    fn lattice_dimensions_follow_odd_index_centers() {
        assert_eq!(Lattice::for_grid(&Grid::filled(5, 5, Cell::Wall)), Lattice { height: 2, width: 2 });
        assert_eq!(Lattice::for_grid(&Grid::filled(21, 8, Cell::Wall)), Lattice { height: 10, width: 3 });
        assert!(Lattice::for_grid(&Grid::filled(5, 3, Cell::Wall)).is_degenerate());
        assert!(!Lattice::for_grid(&Grid::filled(5, 5, Cell::Wall)).is_degenerate());
    }

    #[test]
    fn carved_corridors_form_a_spanning_tree() {
        for seed in 0..20 {
            let mut rng = MazeRng::from_seed(seed);
            let grid = carve_lattice(Grid::filled(15, 21, Cell::Wall), &mut rng);
            let lattice = Lattice::for_grid(&grid);
            let cells = lattice.height * lattice.width;

            // A tree over `cells` lattice nodes opens `cells - 1` walls.
            assert_eq!(grid.count(Cell::Road), cells + (cells - 1), "seed={seed}");
            assert!(road_cells_connected(&grid), "seed={seed}");
        }
    }

    #[test]
    fn border_stays_walled_after_carving() {
        let mut rng = MazeRng::from_seed(3);
        let grid = carve_lattice(Grid::filled(9, 10, Cell::Wall), &mut rng);
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let pos = Pos::new(y, x);
                if grid.is_border(pos) {
                    assert_eq!(grid.cell(pos), Cell::Wall, "border cell {pos:?} was carved");
                }
            }
        }
    }

    #[test]
    fn even_sized_grid_leaves_last_interior_line_walled() {
        let mut rng = MazeRng::from_seed(11);
        let grid = carve_lattice(Grid::filled(6, 6, Cell::Wall), &mut rng);
        for i in 0..6 {
            assert_eq!(grid.cell(Pos::new(4, i)), Cell::Wall);
            assert_eq!(grid.cell(Pos::new(i, 4)), Cell::Wall);
        }
    }

    #[test]
    fn same_seed_carves_the_same_corridors() {
        let left = carve_lattice(Grid::filled(11, 13, Cell::Wall), &mut MazeRng::from_seed(5));
        let right = carve_lattice(Grid::filled(11, 13, Cell::Wall), &mut MazeRng::from_seed(5));
        assert_eq!(left, right);
    }
}
