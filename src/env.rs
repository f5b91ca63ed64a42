//! Host environment boundary.
//!
//! The engine never moves the agent or mutates the maze; it only reads
//! local sensor state through this trait and emits one heading per step.
//! The simulation harness implements it for tests and the CLI; a real
//! maze host would implement it the same way.

use crate::core::{CellReading, GridPoint, Heading, RelativeDirection};

/// Read-only view of the maze host, queried fresh each step.
pub trait MazeEnvironment {
    /// Sense the neighboring cell in the given relative direction.
    fn look(&self, rel: RelativeDirection) -> CellReading;

    /// Agent's current grid position.
    fn position(&self) -> GridPoint;

    /// Target grid position.
    fn target(&self) -> GridPoint;

    /// Agent's current absolute heading.
    fn heading(&self) -> Heading;

    /// Zero-based index of the current run. Run 0 is fresh exploration;
    /// later runs replay recorded junction decisions.
    fn run_index(&self) -> u32;
}
