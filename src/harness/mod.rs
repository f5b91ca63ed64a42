//! Simulation harness for tests, demos, and the CLI.
//!
//! Stands in for the external maze host: an ASCII-parsed (or generated)
//! grid maze plus a synchronous step-by-step simulation that feeds the
//! engine sensor readings and applies its headings.

mod generator;
mod maze;
mod sim;

pub use generator::MazeGenerator;
pub use maze::Maze;
pub use sim::{MazeSimulation, RunResult};
