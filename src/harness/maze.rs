//! ASCII grid maze model.
//!
//! The simulation stand-in for the real maze host. Mazes are rectangular
//! wall grids parsed from text: `#` is a wall, `.` or space is open, `S`
//! marks the start cell and `T` the target (exactly one of each).

use std::collections::{HashSet, VecDeque};
use std::path::Path;

use crate::core::{GridPoint, Heading};
use crate::error::{MargaError, Result};

/// A rectangular grid maze with one start and one target cell.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: GridPoint,
    target: GridPoint,
}

impl Maze {
    /// Parse a maze from ASCII text. Short lines are padded with wall;
    /// any character other than `#`, `.`, space, `S`, `T` is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(MargaError::MazeParse("empty maze text".into()));
        }

        let height = lines.len();
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut walls = vec![true; width * height];
        let mut start = None;
        let mut target = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let open = match ch {
                    '#' => false,
                    '.' | ' ' => true,
                    'S' => {
                        if start.replace(GridPoint::new(x as i32, y as i32)).is_some() {
                            return Err(MargaError::MazeParse("multiple start cells".into()));
                        }
                        true
                    }
                    'T' => {
                        if target.replace(GridPoint::new(x as i32, y as i32)).is_some() {
                            return Err(MargaError::MazeParse("multiple target cells".into()));
                        }
                        true
                    }
                    other => {
                        return Err(MargaError::MazeParse(format!(
                            "unexpected character '{}' at line {}, column {}",
                            other,
                            y + 1,
                            x + 1
                        )));
                    }
                };
                walls[y * width + x] = !open;
            }
        }

        let start = start.ok_or_else(|| MargaError::MazeParse("no start cell 'S'".into()))?;
        let target = target.ok_or_else(|| MargaError::MazeParse("no target cell 'T'".into()))?;

        Ok(Self {
            width,
            height,
            walls,
            start,
            target,
        })
    }

    /// Load a maze from a text file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build a maze from raw parts. Used by the generator.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        walls: Vec<bool>,
        start: GridPoint,
        target: GridPoint,
    ) -> Self {
        Self {
            width,
            height,
            walls,
            start,
            target,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridPoint {
        self.start
    }

    pub fn target(&self) -> GridPoint {
        self.target
    }

    pub fn in_bounds(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Is this cell a wall? Out-of-bounds reads as wall.
    pub fn is_wall(&self, p: GridPoint) -> bool {
        if !self.in_bounds(p) {
            return true;
        }
        self.walls[p.y as usize * self.width + p.x as usize]
    }

    /// Number of open cells reachable from the start (BFS). Drives the
    /// per-run step budget in tests and the CLI.
    pub fn reachable_from_start(&self) -> usize {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(self.start);
        queue.push_back(self.start);
        while let Some(p) = queue.pop_front() {
            for h in Heading::ALL {
                let next = p.step(h);
                if !self.is_wall(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len()
    }

    /// Is the target reachable from the start?
    pub fn target_reachable(&self) -> bool {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(self.start);
        queue.push_back(self.start);
        while let Some(p) = queue.pop_front() {
            if p == self.target {
                return true;
            }
            for h in Heading::ALL {
                let next = p.step(h);
                if !self.is_wall(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Render the maze as ASCII, optionally overlaying visited cells
    /// (`*`) and the agent (`@`).
    pub fn render(&self, visited: Option<&HashSet<GridPoint>>, agent: Option<GridPoint>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = GridPoint::new(x as i32, y as i32);
                let ch = if agent == Some(p) {
                    '@'
                } else if p == self.start {
                    'S'
                } else if p == self.target {
                    'T'
                } else if self.is_wall(p) {
                    '#'
                } else if visited.is_some_and(|v| v.contains(&p)) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "\
#####
#S.T#
#####";

    #[test]
    fn test_parse_simple() {
        let maze = Maze::parse(SIMPLE).unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.start(), GridPoint::new(1, 1));
        assert_eq!(maze.target(), GridPoint::new(3, 1));
        assert!(maze.is_wall(GridPoint::new(0, 0)));
        assert!(!maze.is_wall(GridPoint::new(2, 1)));
        // Out of bounds reads as wall.
        assert!(maze.is_wall(GridPoint::new(-1, 0)));
        assert!(maze.is_wall(GridPoint::new(5, 1)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Maze::parse(""),
            Err(MargaError::MazeParse(_))
        ));
        assert!(matches!(
            Maze::parse("###\n#S#\n###"),
            Err(MargaError::MazeParse(_))
        ));
        assert!(matches!(
            Maze::parse("#####\n#STS#\n#####"),
            Err(MargaError::MazeParse(_))
        ));
        assert!(matches!(
            Maze::parse("#####\n#S?T#\n#####"),
            Err(MargaError::MazeParse(_))
        ));
    }

    #[test]
    fn test_reachability() {
        let maze = Maze::parse(SIMPLE).unwrap();
        assert_eq!(maze.reachable_from_start(), 3);
        assert!(maze.target_reachable());

        let walled = Maze::parse("#####\n#S#T#\n#####").unwrap();
        assert!(!walled.target_reachable());
    }

    #[test]
    fn test_render_round_trip() {
        let maze = Maze::parse(SIMPLE).unwrap();
        let rendered = maze.render(None, None);
        let reparsed = Maze::parse(&rendered).unwrap();
        assert_eq!(reparsed.start(), maze.start());
        assert_eq!(reparsed.target(), maze.target());
        assert_eq!(reparsed.reachable_from_start(), maze.reachable_from_start());
    }
}
