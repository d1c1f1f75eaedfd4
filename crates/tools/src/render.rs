//! Text rendering for finished grids: glyphs with optional ANSI color, or numeric codes.

use maze_core::{Cell, Grid};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const WALL_COLOR: &str = "\x1b[90m";
const ROAD_COLOR: &str = "\x1b[97m";
const ENTRANCE_COLOR: &str = "\x1b[92m";
const EXIT_COLOR: &str = "\x1b[91m";
const HAZARD_COLOR: &str = "\x1b[93m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Glyphs { color: bool },
    Numbers,
}

pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Wall => '█',
        Cell::Road => ' ',
        Cell::Entrance => 'S',
        Cell::Exit => 'E',
        Cell::Hazard => 'T',
    }
}

fn color(cell: Cell) -> &'static str {
    match cell {
        Cell::Wall => WALL_COLOR,
        Cell::Road => ROAD_COLOR,
        Cell::Entrance => ENTRANCE_COLOR,
        Cell::Exit => EXIT_COLOR,
        Cell::Hazard => HAZARD_COLOR,
    }
}

/// One line per grid row, each terminated by `\n`.
pub fn render(grid: &Grid, mode: RenderMode) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        match mode {
            RenderMode::Numbers => {
                let codes: Vec<String> = row.iter().map(|cell| cell.code().to_string()).collect();
                out.push_str(&codes.join(" "));
            }
            RenderMode::Glyphs { color: false } => out.extend(row.iter().map(|&cell| glyph(cell))),
            RenderMode::Glyphs { color: true } => {
                for &cell in row {
                    if cell == Cell::Wall {
                        out.push_str(DIM);
                    }
                    out.push_str(color(cell));
                    out.push(glyph(cell));
                    out.push_str(RESET);
                }
            }
        }
        out.push('\n');
    }
    out
}
