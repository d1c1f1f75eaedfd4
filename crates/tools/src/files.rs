//! Config loading and JSON export for the CLI.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use maze_core::{GeneratedMaze, Grid, MazeConfig};
use serde::Serialize;

pub const EXPORT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
pub struct MazeExport<'a> {
    pub format_version: u32,
    pub seed: u64,
    pub hazard_budget: usize,
    pub hazards_placed: usize,
    pub grid: &'a Grid,
}

impl<'a> MazeExport<'a> {
    pub fn new(maze: &'a GeneratedMaze) -> Self {
        Self {
            format_version: EXPORT_FORMAT_VERSION,
            seed: maze.seed,
            hazard_budget: maze.hazard_budget,
            hazards_placed: maze.hazard_count(),
            grid: &maze.grid,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize maze")
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

/// Reads a JSON `MazeConfig`; absent fields take their defaults.
pub fn load_config(path: &Path) -> Result<MazeConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::generate_maze;
    use tempfile::tempdir;

    #[test]
    fn load_config_fills_missing_fields_with_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("maze.json");
        fs::write(&path, r#"{"height": 11, "width": 15, "place_hazards": false}"#)
            .expect("write config");

        let config = load_config(&path).expect("config loads");
        assert_eq!(config, MazeConfig::new(11, 15).with_hazards(false));
    }

    #[test]
    fn load_config_reports_the_path_on_bad_json() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ height: ").expect("write config");

        let err = load_config(&path).expect_err("malformed JSON must fail");
        assert!(format!("{err:#}").contains("broken.json"), "error should name the file: {err:#}");
    }

    #[test]
    fn export_writes_atomically_and_round_trips_the_grid() {
        let maze = generate_maze(&MazeConfig::new(9, 11).with_seed(5)).expect("valid config");
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("out").join("maze.json");

        MazeExport::new(&maze).write_atomic(&path).expect("export succeeds");
        assert!(!path.with_extension("json.tmp").exists());

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).expect("read export")).expect("json");
        assert_eq!(value["seed"], 5);
        assert_eq!(value["format_version"], EXPORT_FORMAT_VERSION);

        let grid: Grid = serde_json::from_value(value["grid"].clone()).expect("grid decodes");
        assert_eq!(grid, maze.grid);
    }
}
