//! Greedy target heuristic.

use crate::core::{GridPoint, Heading};

/// Compass heading that closes the larger-priority coordinate gap to the
/// target: x before y. Returns `None` when the agent has arrived.
///
/// Pure and wall-unaware; the engine only invokes it once the recorded
/// route is exhausted, and handles a blocked heading itself.
pub fn seek(position: GridPoint, target: GridPoint) -> Option<Heading> {
    if position.x < target.x {
        Some(Heading::East)
    } else if position.x > target.x {
        Some(Heading::West)
    } else if position.y < target.y {
        Some(Heading::South)
    } else if position.y > target.y {
        Some(Heading::North)
    } else {
        None
    }
}
