//! # Marga-Nav: Maze-Traversal Decision Engine
//!
//! A decision engine that guides an agent through an unmapped 2-D grid
//! maze using only local, one-cell sensory input: each step it sees what
//! lies in the four directions relative to its heading, and emits one
//! absolute compass heading for the host to act on. It holds no global
//! map.
//!
//! The engine combines three interacting decision modes:
//!
//! - **Explore** - follow corridors and take unexplored passages,
//!   compactly recording each junction decision in a bounded ledger
//! - **Backtrack** - when exploration dead-ends, unwind recorded
//!   junctions and resume exploring where unexplored passages remain
//! - **SeekTarget** - on repeat runs of the same maze, replay the
//!   recorded junction choices instead of re-exploring; once the
//!   recorded route is exhausted, steer greedily toward the target by
//!   coordinate comparison
//!
//! The engine guarantees completeness (it never reaches a state with no
//! legal move, and every degradation falls back to a locally valid
//! step), not shortest-path optimality.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::config::EngineConfig;
//! use marga_nav::harness::{MazeGenerator, MazeSimulation};
//! use marga_nav::nav::NavEngine;
//!
//! let maze = MazeGenerator::new(7).generate(15, 11);
//! let budget = 4 * maze.reachable_from_start() as u64;
//!
//! let mut engine = NavEngine::new(EngineConfig::with_seed(7));
//! let mut sim = MazeSimulation::new(maze);
//!
//! let result = sim.run(&mut engine, budget);
//! assert!(result.reached);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (headings, cell readings, grid points)
//! - [`env`]: the host boundary trait the engine reads the world through
//! - [`nav`]: the decision engine, junction ledger, and target heuristic
//! - [`config`]: engine configuration with TOML loading
//! - [`harness`]: simulation host for tests, demos, and the CLI
//!
//! ## Data Flow
//!
//! ```text
//!   host step ──► SensorSweep (4 fresh readings)
//!                      │ classify
//!                      ▼
//!               NavEngine mode logic ◄──► JunctionLedger
//!                      │                  (record / pop / replay)
//!                      ▼
//!               one absolute Heading ──► host turns & moves the agent
//! ```

pub mod config;
pub mod core;
pub mod env;
pub mod error;
pub mod harness;
pub mod nav;

pub use config::{BacktrackDiscipline, EngineConfig};
pub use core::{CellReading, GridPoint, Heading, RelativeDirection, SensorSweep, Topology};
pub use env::MazeEnvironment;
pub use error::{MargaError, Result};
pub use nav::{JunctionEntry, JunctionLedger, NavEngine, NavigationMode, StepContext};
