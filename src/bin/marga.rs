//! Maze-solving demo for the marga-nav engine.
//!
//! Loads an ASCII maze (or generates one) and drives the engine through
//! repeated runs, printing per-run step counts to show the replay effect.
//!
//! Usage:
//!   cargo run --bin marga -- --maze mazes/crossroads.txt --runs 3
//!   cargo run --bin marga -- --width 21 --height 15 --seed 7 --show-map

use std::path::PathBuf;

use clap::Parser;

use marga_nav::config::EngineConfig;
use marga_nav::error::Result;
use marga_nav::harness::{Maze, MazeGenerator, MazeSimulation};
use marga_nav::nav::NavEngine;

/// Maze-traversal decision engine demo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ASCII maze file ('#' wall, '.' open, 'S' start, 'T' target).
    /// When omitted, a maze is generated.
    #[arg(short, long)]
    maze: Option<PathBuf>,

    /// Generated maze width (ignored with --maze).
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Generated maze height (ignored with --maze).
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Seed for maze generation and engine tie-breaking.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of runs of the same maze.
    #[arg(short, long, default_value_t = 3)]
    runs: u32,

    /// Step budget per run, as a multiple of reachable cells.
    #[arg(long, default_value_t = 8)]
    budget_factor: u64,

    /// Engine configuration TOML file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the maze with the visited trail after each run.
    #[arg(long)]
    show_map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if config.rng_seed.is_none() {
        config.rng_seed = Some(args.seed);
    }

    let maze = match &args.maze {
        Some(path) => {
            println!("Loading maze: {}", path.display());
            Maze::load(path)?
        }
        None => {
            println!(
                "Generating {}x{} maze (seed {})",
                args.width, args.height, args.seed
            );
            MazeGenerator::new(args.seed).generate(args.width, args.height)
        }
    };

    let reachable = maze.reachable_from_start();
    let budget = args.budget_factor * reachable as u64;
    println!(
        "Maze {}x{}, {} reachable cells, start {} -> target {}, budget {} steps/run",
        maze.width(),
        maze.height(),
        reachable,
        maze.start(),
        maze.target(),
        budget
    );

    let mut engine = NavEngine::new(config);
    let mut sim = MazeSimulation::new(maze);

    for run in 0..args.runs {
        if run > 0 {
            sim.next_run(&mut engine);
        }
        let result = sim.run(&mut engine, budget);
        if result.reached {
            println!(
                "Run {}: reached target in {} steps ({} junctions recorded)",
                run,
                result.steps,
                engine.ledger().len()
            );
        } else {
            println!("Run {}: budget exhausted after {} steps", run, result.steps);
        }
        if args.show_map {
            print!("{}", sim.maze().render(Some(sim.visited()), None));
        }
    }

    Ok(())
}
