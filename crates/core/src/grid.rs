//! Cell-state grid and tile-space primitives shared by carving, border selection, and validation.

use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dy: i32, dx: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }
}

/// Four-directional offsets in the order every search in this crate expands them.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Road,
    Entrance,
    Exit,
    Hazard,
}

impl Cell {
    /// Stable numeric code, also used by the numeric renderer.
    pub fn code(self) -> u8 {
        match self {
            Cell::Wall => 0,
            Cell::Road => 1,
            Cell::Entrance => 2,
            Cell::Exit => 3,
            Cell::Hazard => 4,
        }
    }

    pub fn is_passable(self) -> bool {
        match self {
            Cell::Wall => false,
            Cell::Road | Cell::Entrance | Cell::Exit | Cell::Hazard => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(height: usize, width: usize, fill: Cell) -> Self {
        Self { width, height, cells: vec![fill; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && (pos.y == 0
                || pos.x == 0
                || pos.y as usize == self.height - 1
                || pos.x as usize == self.width - 1)
    }

    /// Reads a cell; anything outside the grid reads as `Wall`.
    pub fn cell(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    /// Writes a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.cells[index] = cell;
        }
    }

    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        CARDINAL_OFFSETS
            .iter()
            .map(move |&(dy, dx)| pos.offset(dy, dx))
            .filter(|next| self.in_bounds(*next))
    }

    /// First cell in row-major order holding `cell`.
    pub fn find(&self, cell: Cell) -> Option<Pos> {
        self.cells.iter().position(|&candidate| candidate == cell).map(|index| self.pos_of(index))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }

    pub fn positions_of(&self, cell: Cell) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &candidate)| candidate == cell)
            .map(|(index, _)| self.pos_of(index))
            .collect()
    }

    /// Replaces every `from` cell with `to`, returning how many cells changed.
    pub fn replace_all(&mut self, from: Cell, to: Cell) -> usize {
        let mut replaced = 0;
        for cell in self.cells.iter_mut().filter(|cell| **cell == from) {
            *cell = to;
            replaced += 1;
        }
        replaced
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.cells.iter().map(|cell| cell.code()));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write(&self.canonical_bytes());
        hasher.finish()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }

    fn pos_of(&self, index: usize) -> Pos {
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_wall_and_writes_are_ignored() {
        let mut grid = Grid::filled(5, 7, Cell::Road);
        assert_eq!(grid.cell(Pos::new(-1, 0)), Cell::Wall);
        assert_eq!(grid.cell(Pos::new(0, 7)), Cell::Wall);

        grid.set(Pos::new(5, 0), Cell::Hazard);
        assert_eq!(grid.count(Cell::Hazard), 0);
    }

    #[test]
    fn border_detection_covers_all_four_sides_only() {
        let grid = Grid::filled(5, 6, Cell::Wall);
        assert!(grid.is_border(Pos::new(0, 3)));
        assert!(grid.is_border(Pos::new(4, 3)));
        assert!(grid.is_border(Pos::new(2, 0)));
        assert!(grid.is_border(Pos::new(2, 5)));
        assert!(!grid.is_border(Pos::new(2, 3)));
        assert!(!grid.is_border(Pos::new(5, 3)));
    }

    #[test]
    fn corner_has_two_neighbors_and_interior_has_four() {
        let grid = Grid::filled(5, 5, Cell::Wall);
        assert_eq!(grid.neighbors(Pos::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors(Pos::new(2, 2)).count(), 4);
    }

    #[test]
    fn find_returns_first_match_in_row_major_order() {
        let mut grid = Grid::filled(5, 5, Cell::Wall);
        grid.set(Pos::new(3, 1), Cell::Exit);
        grid.set(Pos::new(1, 4), Cell::Exit);
        assert_eq!(grid.find(Cell::Exit), Some(Pos::new(1, 4)));
        assert_eq!(grid.find(Cell::Entrance), None);
    }

    #[test]
    fn replace_all_reports_changed_cells() {
        let mut grid = Grid::filled(5, 5, Cell::Wall);
        grid.set(Pos::new(1, 1), Cell::Hazard);
        grid.set(Pos::new(2, 1), Cell::Hazard);
        assert_eq!(grid.replace_all(Cell::Hazard, Cell::Road), 2);
        assert_eq!(grid.count(Cell::Road), 2);
        assert_eq!(grid.count(Cell::Hazard), 0);
    }

    #[test]
    fn fingerprint_tracks_cell_changes() {
        let mut grid = Grid::filled(5, 5, Cell::Wall);
        let baseline = grid.fingerprint();
        assert_eq!(baseline, Grid::filled(5, 5, Cell::Wall).fingerprint());

        grid.set(Pos::new(2, 2), Cell::Road);
        assert_ne!(baseline, grid.fingerprint());
    }

    #[test]
    fn rows_are_row_major_slices() {
        let mut grid = Grid::filled(5, 6, Cell::Wall);
        grid.set(Pos::new(1, 2), Cell::Road);
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].len(), 6);
        assert_eq!(rows[1][2], Cell::Road);
    }
}
