//! Integer grid coordinates.

use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// Integer (x, y) grid coordinate.
///
/// The engine never computes its own position from moves; the host
/// supplies the current position each step. `GridPoint` exists so that
/// junction records and the target comparison have an exact key type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighboring point one cell toward `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another point.
    #[inline]
    pub fn manhattan(self, other: GridPoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
