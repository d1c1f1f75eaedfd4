use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::{MazeConfig, generate_maze};
use maze_tools::{MazeExport, RenderMode, load_config, render};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a rectangular maze with an entrance, an exit, and traps")]
struct Args {
    /// Maze height in cells (at least 5)
    height: Option<usize>,
    /// Maze width in cells (at least 5)
    width: Option<usize>,
    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// Print numeric cell codes instead of glyphs
    #[arg(long)]
    numbers: bool,
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
    /// Do not place traps
    #[arg(long)]
    no_traps: bool,
    /// Upper bound for the number of traps
    #[arg(long)]
    max_traps: Option<usize>,
    /// Print the maze as JSON
    #[arg(long, conflicts_with = "numbers")]
    json: bool,
    /// JSON file with a maze configuration; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Also write the maze as JSON to this path
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl Args {
    fn resolve_config(&self) -> Result<MazeConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MazeConfig::default(),
        };
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_traps {
            config.place_hazards = false;
        }
        if let Some(max_traps) = self.max_traps {
            config.max_hazards = max_traps;
        }
        Ok(config)
    }

    fn render_mode(&self) -> RenderMode {
        if self.numbers {
            RenderMode::Numbers
        } else {
            RenderMode::Glyphs { color: !self.no_color }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.resolve_config()?;
    let maze = generate_maze(&config).context("Failed to generate maze")?;
    info!(
        "generated {}x{} maze with seed {} ({} traps, {:?})",
        config.height,
        config.width,
        maze.seed,
        maze.hazard_count(),
        maze.strategy
    );

    let export = MazeExport::new(&maze);
    if let Some(path) = &args.out {
        export
            .write_atomic(path)
            .with_context(|| format!("Failed to write maze to {}", path.display()))?;
    }

    if args.json {
        println!("{}", export.to_json()?);
    } else {
        print!("{}", render(&maze.grid, args.render_mode()));
    }

    Ok(())
}
