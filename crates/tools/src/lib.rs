//! I/O adapters around the maze core: text rendering, config files, and JSON export.

pub mod files;
pub mod render;

pub use files::{MazeExport, load_config};
pub use render::{RenderMode, render};
