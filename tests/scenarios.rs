//! Scenario tests: hand-written mazes with known-correct engine behavior.

use marga_nav::config::{BacktrackDiscipline, EngineConfig};
use marga_nav::harness::{Maze, MazeSimulation, RunResult};
use marga_nav::nav::NavEngine;

const CORRIDOR: &str = include_str!("../mazes/corridor.txt");
const CROSSROADS: &str = include_str!("../mazes/crossroads.txt");

fn run_once(sim: &mut MazeSimulation, engine: &mut NavEngine, budget: u64) -> RunResult {
    let result = sim.run(engine, budget);
    assert!(result.reached, "run did not reach target in {} steps", budget);
    result
}

/// A straight 5-cell corridor is traversed in exactly 4 forward moves on
/// the first run, with no junctions ever recorded.
#[test]
fn test_straight_corridor_four_moves() {
    env_logger::try_init().ok();
    let maze = Maze::parse(CORRIDOR).unwrap();
    let mut engine = NavEngine::new(EngineConfig::with_seed(1));
    let mut sim = MazeSimulation::new(maze);

    let first = run_once(&mut sim, &mut engine, 100);
    assert_eq!(first.steps, 4);
    assert!(engine.ledger().is_empty());

    // Replay run: same deterministic traversal.
    sim.next_run(&mut engine);
    let second = run_once(&mut sim, &mut engine, 100);
    assert_eq!(second.steps, 4);
}

/// A single 4-way crossroads: one arm leads to the target, the other two
/// are dead ends. Exactly one junction is recorded during exploration,
/// and the replay run takes the direct 6-move route.
#[test]
fn test_single_crossroads_records_one_junction() {
    env_logger::try_init().ok();
    for seed in [1, 2, 3, 4, 5] {
        let maze = Maze::parse(CROSSROADS).unwrap();
        let budget = 4 * maze.reachable_from_start() as u64;
        let mut engine = NavEngine::new(EngineConfig::with_seed(seed));
        let mut sim = MazeSimulation::new(maze);

        run_once(&mut sim, &mut engine, budget);
        assert_eq!(engine.ledger().len(), 1, "seed {}", seed);

        // Replay follows the junction's final recorded choice straight
        // to the target: the optimal 6 moves.
        sim.next_run(&mut engine);
        let replay = run_once(&mut sim, &mut engine, budget);
        assert_eq!(replay.steps, 6, "seed {}", seed);
    }
}

/// The coordinate-scan discipline solves the crossroads the same way.
#[test]
fn test_crossroads_coordinate_scan_discipline() {
    let maze = Maze::parse(CROSSROADS).unwrap();
    let budget = 4 * maze.reachable_from_start() as u64;
    let config = EngineConfig {
        discipline: BacktrackDiscipline::CoordinateScan,
        ..EngineConfig::with_seed(3)
    };
    let mut engine = NavEngine::new(config);
    let mut sim = MazeSimulation::new(maze);

    run_once(&mut sim, &mut engine, budget);
    assert_eq!(engine.ledger().len(), 1);

    sim.next_run(&mut engine);
    let replay = run_once(&mut sim, &mut engine, budget);
    assert_eq!(replay.steps, 6);
}

/// With a zero-capacity ledger the engine records nothing but still
/// reaches the target; memory exhaustion degrades, never halts.
#[test]
fn test_zero_capacity_ledger_still_completes() {
    let maze = Maze::parse(CROSSROADS).unwrap();
    let config = EngineConfig {
        ledger_capacity: 0,
        ..EngineConfig::with_seed(4)
    };
    let mut engine = NavEngine::new(config);
    let mut sim = MazeSimulation::new(maze);

    let result = sim.run(&mut engine, 2000);
    assert!(result.reached);
    assert!(engine.ledger().is_empty());
}

/// Replay is deterministic: runs 2 and 3 of the same maze take identical
/// step counts, and neither exceeds the exploratory first run.
#[test]
fn test_replay_deterministic_across_runs() {
    use marga_nav::harness::MazeGenerator;

    for seed in [3, 11, 27] {
        let maze = MazeGenerator::new(seed).generate(21, 15);
        let budget = 4 * maze.reachable_from_start() as u64;
        let mut engine = NavEngine::new(EngineConfig::with_seed(seed));
        let mut sim = MazeSimulation::new(maze);

        let first = run_once(&mut sim, &mut engine, budget);

        sim.next_run(&mut engine);
        let second = run_once(&mut sim, &mut engine, budget);
        assert!(second.steps <= first.steps, "seed {}", seed);

        sim.next_run(&mut engine);
        let third = run_once(&mut sim, &mut engine, budget);
        assert_eq!(third.steps, second.steps, "seed {}", seed);
    }
}
