//! Synchronous maze simulation.
//!
//! Plays the role of the external maze host: owns the agent's position
//! and heading, tracks which cells have been entered this run, answers
//! sensor queries, and applies the engine's headings one step at a time.

use std::collections::HashSet;

use crate::core::{CellReading, GridPoint, Heading, RelativeDirection};
use crate::env::MazeEnvironment;
use crate::nav::NavEngine;

use super::maze::Maze;

/// Outcome of driving one run to completion or budget exhaustion.
#[derive(Clone, Copy, Debug)]
pub struct RunResult {
    /// Whether the agent reached the target within the budget.
    pub reached: bool,
    /// Decision steps consumed (blocked moves included).
    pub steps: u64,
}

/// Step-by-step maze simulation implementing [`MazeEnvironment`].
pub struct MazeSimulation {
    maze: Maze,
    position: GridPoint,
    heading: Heading,
    visited: HashSet<GridPoint>,
    run_index: u32,
    steps: u64,
}

impl MazeSimulation {
    /// Place the agent at the maze's start, facing North, on run 0.
    pub fn new(maze: Maze) -> Self {
        let position = maze.start();
        let mut visited = HashSet::new();
        visited.insert(position);
        Self {
            maze,
            position,
            heading: Heading::North,
            visited,
            run_index: 0,
            steps: 0,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn at_target(&self) -> bool {
        self.position == self.maze.target()
    }

    /// Cells entered so far this run.
    pub fn visited(&self) -> &HashSet<GridPoint> {
        &self.visited
    }

    /// Turn the agent to face `heading` and move one cell if that
    /// direction is open. A blocked heading still consumes the step (the
    /// no-progress degradation the host's step cap is there to catch).
    /// Returns whether the agent moved.
    pub fn apply(&mut self, heading: Heading) -> bool {
        self.heading = heading;
        self.steps += 1;
        let next = self.position.step(heading);
        if self.maze.is_wall(next) {
            log::debug!("blocked move {} at {}", heading, self.position);
            return false;
        }
        self.position = next;
        self.visited.insert(next);
        true
    }

    /// Drive the engine until the target is reached or the step budget
    /// runs out.
    pub fn run(&mut self, engine: &mut NavEngine, max_steps: u64) -> RunResult {
        while self.steps < max_steps {
            if self.at_target() {
                return RunResult {
                    reached: true,
                    steps: self.steps,
                };
            }
            let heading = engine.decide(&*self);
            self.apply(heading);
        }
        RunResult {
            reached: self.at_target(),
            steps: self.steps,
        }
    }

    /// Begin the next run of the same maze: the agent returns to the
    /// start, the visited trail and step count reset, and the engine
    /// keeps its ledger while zeroing per-run state.
    pub fn next_run(&mut self, engine: &mut NavEngine) {
        self.run_index += 1;
        self.position = self.maze.start();
        self.heading = Heading::North;
        self.visited.clear();
        self.visited.insert(self.position);
        self.steps = 0;
        engine.on_run_reset();
        log::debug!("starting run {}", self.run_index);
    }
}

impl MazeEnvironment for MazeSimulation {
    fn look(&self, rel: RelativeDirection) -> CellReading {
        let cell = self.position.step(self.heading.rotate(rel));
        if self.maze.is_wall(cell) {
            CellReading::Wall
        } else if self.visited.contains(&cell) {
            CellReading::Visited
        } else {
            CellReading::Passage
        }
    }

    fn position(&self) -> GridPoint {
        self.position
    }

    fn target(&self) -> GridPoint {
        self.maze.target()
    }

    fn heading(&self) -> Heading {
        self.heading
    }

    fn run_index(&self) -> u32 {
        self.run_index
    }
}
