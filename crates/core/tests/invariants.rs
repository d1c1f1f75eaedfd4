use maze_core::{
    Cell, GeneratedMaze, HAZARD_TOLERANCE, MazeConfig, MazeError, find_route, generate_maze,
};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};

fn check_invariants(maze: &GeneratedMaze, max_hazards: usize) -> Result<(), String> {
    let grid = &maze.grid;
    let seed = maze.seed;

    if grid.count(Cell::Entrance) != 1 || grid.count(Cell::Exit) != 1 {
        return Err(format!("seed {seed}: expected one entrance and one exit"));
    }
    let (Some(entrance), Some(exit)) = (grid.find(Cell::Entrance), grid.find(Cell::Exit)) else {
        return Err(format!("seed {seed}: entrance or exit missing"));
    };
    if !grid.is_border(entrance) || !grid.is_border(exit) {
        return Err(format!("seed {seed}: entrance {entrance:?} / exit {exit:?} off the border"));
    }

    let Some(route) = find_route(grid) else {
        return Err(format!("seed {seed}: exit unreachable"));
    };
    if route.hazards_crossed > HAZARD_TOLERANCE {
        return Err(format!("seed {seed}: route crosses {} hazards", route.hazards_crossed));
    }

    let hazards = grid.count(Cell::Hazard);
    if hazards > max_hazards || hazards > maze.hazard_budget {
        return Err(format!(
            "seed {seed}: {hazards} hazards exceed cap {max_hazards} or budget {}",
            maze.hazard_budget
        ));
    }

    Ok(())
}

#[test]
fn test_fuzz_generated_mazes_keep_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let inputs = (any::<u64>(), 5_usize..=41, 5_usize..=41, 0_usize..=10);

    runner
        .run(&inputs, |(seed, height, width, max_hazards)| {
            let config =
                MazeConfig::new(height, width).with_seed(seed).with_max_hazards(max_hazards);
            let maze = generate_maze(&config).map_err(|e| TestCaseError::fail(e.to_string()))?;
            check_invariants(&maze, max_hazards).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("generated mazes should preserve invariants");
}

#[test]
fn test_boundary_sizes_produce_valid_mazes() {
    for (height, width) in [(5, 5), (5, 6), (6, 5), (5, 41), (41, 5), (6, 6)] {
        for seed in 0..10 {
            let config = MazeConfig::new(height, width).with_seed(seed);
            let maze = generate_maze(&config).expect("minimum-sized config is valid");
            check_invariants(&maze, config.max_hazards)
                .unwrap_or_else(|message| panic!("{height}x{width}: {message}"));
        }
    }
}

#[test]
fn test_undersized_requests_are_configuration_errors() {
    for (height, width) in [(4, 10), (10, 4), (0, 0), (3, 5)] {
        let err = generate_maze(&MazeConfig::new(height, width).with_seed(1))
            .expect_err("undersized maze must be rejected");
        assert_eq!(err, MazeError::InvalidDimensions { height, width });
    }
}

#[test]
fn test_hazard_free_mazes_solve_without_hazards() {
    for seed in 0..25 {
        let config = MazeConfig::new(17, 23).with_seed(seed).with_hazards(false);
        let maze = generate_maze(&config).expect("generation failed");
        assert_eq!(maze.grid.count(Cell::Hazard), 0);
        let route = find_route(&maze.grid).expect("exit reachable");
        assert_eq!(route.hazards_crossed, 0);
    }
}
