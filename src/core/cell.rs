//! Cell readings and local-topology classification.
//!
//! The agent senses exactly one cell in each of the four relative
//! directions. A [`SensorSweep`] holds one such set of readings and
//! classifies the local neighborhood by counting open exits.

use serde::{Deserialize, Serialize};

use super::heading::RelativeDirection;
use crate::env::MazeEnvironment;

/// Sensed type of a neighboring cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellReading {
    /// Impassable wall.
    Wall,
    /// Open cell, never visited by the agent this run.
    Passage,
    /// Open cell, previously entered this run.
    Visited,
}

impl CellReading {
    /// Is this cell traversable?
    #[inline]
    pub fn is_open(self) -> bool {
        self != CellReading::Wall
    }
}

/// Local topology of the agent's current cell, by open-exit count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// No open exits at all. A sensing contradiction in a connected maze;
    /// the engine responds with a fixed fallback heading.
    Enclosed,
    /// Exactly one open exit.
    DeadEnd,
    /// Exactly two open exits.
    Corridor,
    /// Three or four open exits.
    Junction,
}

impl Topology {
    /// Topology name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Topology::Enclosed => "Enclosed",
            Topology::DeadEnd => "DeadEnd",
            Topology::Corridor => "Corridor",
            Topology::Junction => "Junction",
        }
    }
}

/// One full set of sensor readings, indexed by [`RelativeDirection`].
///
/// Read fresh from the environment every step; readings are only valid
/// for the position and heading they were captured at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SensorSweep {
    readings: [CellReading; 4],
}

impl SensorSweep {
    /// Build a sweep from readings in `RelativeDirection::ALL` order
    /// (Ahead, Right, Behind, Left).
    pub fn new(readings: [CellReading; 4]) -> Self {
        Self { readings }
    }

    /// Query all four relative directions from the environment.
    pub fn read_from<E: MazeEnvironment + ?Sized>(env: &E) -> Self {
        let mut readings = [CellReading::Wall; 4];
        for rel in RelativeDirection::ALL {
            readings[rel.index()] = env.look(rel);
        }
        Self { readings }
    }

    /// Reading in the given relative direction.
    #[inline]
    pub fn get(&self, rel: RelativeDirection) -> CellReading {
        self.readings[rel.index()]
    }

    /// Number of non-wall exits.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.readings.iter().filter(|r| r.is_open()).count()
    }

    /// Number of unexplored (never visited) exits.
    #[inline]
    pub fn unexplored_count(&self) -> usize {
        self.readings
            .iter()
            .filter(|r| **r == CellReading::Passage)
            .count()
    }

    /// Number of previously visited exits.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.readings
            .iter()
            .filter(|r| **r == CellReading::Visited)
            .count()
    }

    /// Classify the local neighborhood by open-exit count.
    pub fn classify(&self) -> Topology {
        match self.open_count() {
            0 => Topology::Enclosed,
            1 => Topology::DeadEnd,
            2 => Topology::Corridor,
            _ => Topology::Junction,
        }
    }
}
