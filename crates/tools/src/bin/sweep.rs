use anyhow::{Result, bail};
use clap::Parser;
use maze_core::{Cell, HAZARD_TOLERANCE, MazeConfig, find_route, generate_maze};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about = "Generate many mazes and check their invariants")]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    count: u32,
    #[arg(long, default_value_t = 21)]
    height: usize,
    #[arg(long, default_value_t = 21)]
    width: usize,
    #[arg(long, default_value_t = 5)]
    max_traps: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Sweeping {} mazes of {}x{} from seed {}...",
        args.count, args.height, args.width, args.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_hazards = 0usize;
    let mut total_steps = 0u64;
    let mut rollbacks = 0u32;
    for _ in 0..args.count {
        let maze_seed = rng.next_u64();
        let config = MazeConfig::new(args.height, args.width)
            .with_seed(maze_seed)
            .with_max_hazards(args.max_traps);
        let maze = generate_maze(&config)?;
        let grid = &maze.grid;

        if grid.count(Cell::Entrance) != 1 || grid.count(Cell::Exit) != 1 {
            bail!("seed {maze_seed}: expected exactly one entrance and one exit");
        }
        for cell in [Cell::Entrance, Cell::Exit] {
            if !grid.find(cell).is_some_and(|pos| grid.is_border(pos)) {
                bail!("seed {maze_seed}: {cell:?} is not on the border");
            }
        }
        let Some(route) = find_route(grid) else {
            bail!("seed {maze_seed}: exit is unreachable");
        };
        if route.hazards_crossed > HAZARD_TOLERANCE {
            bail!("seed {maze_seed}: route crosses {} traps", route.hazards_crossed);
        }
        let hazards = grid.count(Cell::Hazard);
        if hazards > args.max_traps {
            bail!("seed {maze_seed}: {hazards} traps exceed the cap of {}", args.max_traps);
        }

        total_hazards += hazards;
        total_steps += u64::from(route.steps);
        if maze.hazards_rolled_back > 0 {
            rollbacks += 1;
        }
    }

    let count = f64::from(args.count.max(1));
    println!("All {} mazes valid.", args.count);
    println!("Mean traps: {:.2}", total_hazards as f64 / count);
    println!("Mean route length: {:.1}", total_steps as f64 / count);
    println!("Safety-net rollbacks: {rollbacks}");

    Ok(())
}
