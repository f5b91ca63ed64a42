//! Random maze generation.
//!
//! Seeded randomized depth-first carver producing perfect (loop-free)
//! mazes on an odd-dimension lattice. Every odd-coordinate cell is
//! carved, so the start at (1, 1) and target at (width-2, height-2) are
//! always open and connected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{GridPoint, Heading};

use super::maze::Maze;

/// Seeded maze generator.
pub struct MazeGenerator {
    rng: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a maze. Dimensions are clamped to at least 5 and rounded
    /// up to odd so the carving lattice fits.
    pub fn generate(&mut self, width: usize, height: usize) -> Maze {
        let width = width.max(5) | 1;
        let height = height.max(5) | 1;
        let mut walls = vec![true; width * height];

        let start = GridPoint::new(1, 1);
        let target = GridPoint::new(width as i32 - 2, height as i32 - 2);

        // Iterative DFS over the odd-coordinate lattice, carving the
        // wall between each visited pair of lattice cells.
        let mut stack = vec![start];
        walls[idx(start, width)] = false;
        while let Some(current) = stack.last().copied() {
            let mut options = [Heading::North; 4];
            let mut count = 0;
            for h in Heading::ALL {
                let next = lattice_step(current, h);
                if in_carve_bounds(next, width, height) && walls[idx(next, width)] {
                    options[count] = h;
                    count += 1;
                }
            }
            if count == 0 {
                stack.pop();
                continue;
            }
            let h = options[self.rng.random_range(0..count)];
            let mid = current.step(h);
            let next = lattice_step(current, h);
            walls[idx(mid, width)] = false;
            walls[idx(next, width)] = false;
            stack.push(next);
        }

        Maze::from_parts(width, height, walls, start, target)
    }
}

#[inline]
fn idx(p: GridPoint, width: usize) -> usize {
    p.y as usize * width + p.x as usize
}

/// Two cells toward `h` (one lattice step).
#[inline]
fn lattice_step(p: GridPoint, h: Heading) -> GridPoint {
    p.step(h).step(h)
}

/// Lattice cells stay strictly inside the outer wall ring.
#[inline]
fn in_carve_bounds(p: GridPoint, width: usize, height: usize) -> bool {
    p.x >= 1 && p.y >= 1 && (p.x as usize) < width - 1 && (p.y as usize) < height - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_maze_is_connected() {
        for seed in 0..8 {
            let maze = MazeGenerator::new(seed).generate(15, 11);
            assert_eq!(maze.width(), 15);
            assert_eq!(maze.height(), 11);
            assert!(!maze.is_wall(maze.start()));
            assert!(!maze.is_wall(maze.target()));
            assert!(maze.target_reachable(), "seed {} disconnected", seed);
        }
    }

    #[test]
    fn test_dimensions_clamped_to_odd() {
        let maze = MazeGenerator::new(1).generate(8, 4);
        assert_eq!(maze.width(), 9);
        assert_eq!(maze.height(), 5);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = MazeGenerator::new(99).generate(21, 21).render(None, None);
        let b = MazeGenerator::new(99).generate(21, 21).render(None, None);
        assert_eq!(a, b);
    }
}
