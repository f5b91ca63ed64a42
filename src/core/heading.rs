//! Compass headings and agent-relative directions.
//!
//! All absolute directions are one of the four compass points, indexed
//! clockwise (North = 0). Relative directions are quarter-turn offsets
//! from the agent's current heading, so converting between the two is
//! modular arithmetic in both directions.

use serde::{Deserialize, Serialize};

/// Absolute compass heading.
///
/// Grid convention: y grows southward (row order), so `North` steps to a
/// smaller y and `South` to a larger one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Clockwise index (0..=3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading from a clockwise index (wraps modulo 4).
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    /// The opposite compass direction (North↔South, East↔West).
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Absolute heading reached by turning `rel` from this heading.
    #[inline]
    pub fn rotate(self, rel: RelativeDirection) -> Self {
        Self::from_index(self.index() + rel.index())
    }

    /// Relative direction of this heading as seen from `current`.
    ///
    /// Inverse of [`Heading::rotate`]: `current.rotate(h.relative_to(current)) == h`.
    #[inline]
    pub fn relative_to(self, current: Heading) -> RelativeDirection {
        RelativeDirection::from_index((self.index() + 4 - current.index()) % 4)
    }

    /// Unit grid step for this heading (y grows southward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// Heading name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction relative to the agent's current heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelativeDirection {
    Ahead = 0,
    Right = 1,
    Behind = 2,
    Left = 3,
}

impl RelativeDirection {
    /// All relative directions in quarter-turn order.
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Ahead,
        RelativeDirection::Right,
        RelativeDirection::Behind,
        RelativeDirection::Left,
    ];

    /// Fixed scan order for forward decisions (never looks behind).
    pub const SCAN_ORDER: [RelativeDirection; 3] = [
        RelativeDirection::Ahead,
        RelativeDirection::Right,
        RelativeDirection::Left,
    ];

    /// Quarter-turn offset (0..=3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Relative direction from a quarter-turn offset (wraps modulo 4).
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => RelativeDirection::Ahead,
            1 => RelativeDirection::Right,
            2 => RelativeDirection::Behind,
            _ => RelativeDirection::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_involution() {
        for h in Heading::ALL {
            assert_eq!(h.reverse().reverse(), h);
            assert_ne!(h.reverse(), h);
        }
    }

    #[test]
    fn test_rotate_behind_is_reverse() {
        for h in Heading::ALL {
            assert_eq!(h.rotate(RelativeDirection::Behind), h.reverse());
            assert_eq!(h.rotate(RelativeDirection::Ahead), h);
        }
    }

    #[test]
    fn test_rotate_relative_to_inverse() {
        for current in Heading::ALL {
            for rel in RelativeDirection::ALL {
                let absolute = current.rotate(rel);
                assert_eq!(absolute.relative_to(current), rel);
            }
        }
    }

    #[test]
    fn test_rotation_examples() {
        assert_eq!(Heading::North.rotate(RelativeDirection::Right), Heading::East);
        assert_eq!(Heading::North.rotate(RelativeDirection::Left), Heading::West);
        assert_eq!(Heading::West.rotate(RelativeDirection::Right), Heading::North);
        assert_eq!(Heading::South.relative_to(Heading::East), RelativeDirection::Right);
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        for h in Heading::ALL {
            let (dx, dy) = h.delta();
            let (rx, ry) = h.reverse().delta();
            assert_eq!(dx + rx, 0);
            assert_eq!(dy + ry, 0);
        }
    }
}
