//! Navigation decision engine.
//!
//! One decision per step: classify the local neighborhood, pick a mode,
//! emit an absolute heading. Exploration records junction decisions in
//! the ledger, backtracking unwinds them, and repeat runs of the same
//! maze replay them instead of re-exploring. Once the recorded route is
//! exhausted on a repeat run, the engine steers greedily toward the
//! target by coordinate comparison.
//!
//! There are no fatal failure modes here: a missing ledger entry, a
//! blocked recorded heading, or a contradictory sensor sweep all degrade
//! to a locally valid move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{BacktrackDiscipline, EngineConfig};
use crate::core::{CellReading, GridPoint, Heading, RelativeDirection, SensorSweep, Topology};
use crate::env::MazeEnvironment;

use super::ledger::{JunctionEntry, JunctionLedger};
use super::seek::seek;

/// Active decision mode. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationMode {
    /// Forward search for unexplored passages.
    Explore,
    /// Unwinding recorded junctions after exploration stalled.
    Backtrack,
    /// Recorded route exhausted on a repeat run; greedy compass steps
    /// toward the target. Terminal for the run.
    SeekTarget,
}

impl NavigationMode {
    /// Mode name for logging.
    pub fn name(self) -> &'static str {
        match self {
            NavigationMode::Explore => "Explore",
            NavigationMode::Backtrack => "Backtrack",
            NavigationMode::SeekTarget => "SeekTarget",
        }
    }
}

/// Everything one decision sees, captured fresh from the host.
#[derive(Clone, Copy, Debug)]
pub struct StepContext {
    /// Sensor readings for all four relative directions.
    pub sweep: SensorSweep,
    /// Agent position, host-supplied.
    pub position: GridPoint,
    /// Agent heading, host-supplied.
    pub heading: Heading,
    /// Target position, host-supplied.
    pub target: GridPoint,
    /// Whether this is the first run of the maze (fresh exploration).
    pub first_run: bool,
}

impl StepContext {
    /// Capture a context by querying the environment, including all four
    /// sensor readings.
    pub fn capture<E: MazeEnvironment + ?Sized>(env: &E) -> Self {
        Self {
            sweep: SensorSweep::read_from(env),
            position: env.position(),
            heading: env.heading(),
            target: env.target(),
            first_run: env.run_index() == 0,
        }
    }

    /// Reading in the direction of an absolute heading.
    #[inline]
    fn reading_toward(&self, toward: Heading) -> CellReading {
        self.sweep.get(toward.relative_to(self.heading))
    }
}

/// Maze navigation engine.
///
/// Owns the navigation mode and the junction ledger; nothing else
/// mutates them. Constructed once per maze attempt and driven one
/// decision per host step:
///
/// ```rust,ignore
/// let mut engine = NavEngine::new(EngineConfig::default());
/// loop {
///     let heading = engine.decide(&env);
///     env.apply(heading);
/// }
/// ```
///
/// Between runs of the same maze the host calls [`NavEngine::on_run_reset`];
/// the ledger contents survive so later runs replay recorded decisions.
pub struct NavEngine {
    mode: NavigationMode,
    ledger: JunctionLedger,
    config: EngineConfig,
    rng: StdRng,
    steps_this_run: u64,
    capacity_warned: bool,
}

impl NavEngine {
    /// Create an engine. The RNG is seeded from the configuration, or
    /// from the OS when no seed is set.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            mode: NavigationMode::Explore,
            ledger: JunctionLedger::new(config.ledger_capacity),
            config,
            rng,
            steps_this_run: 0,
            capacity_warned: false,
        }
    }

    /// Current navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Recorded junction decisions.
    pub fn ledger(&self) -> &JunctionLedger {
        &self.ledger
    }

    /// Decisions made so far this run.
    pub fn steps_this_run(&self) -> u64 {
        self.steps_this_run
    }

    /// Reset per-run state between runs of the same maze: mode, step
    /// counter, and the ledger's replay cursor. Ledger contents persist.
    pub fn on_run_reset(&mut self) {
        self.mode = NavigationMode::Explore;
        self.steps_this_run = 0;
        self.ledger.reset_cursor();
        log::debug!("run reset: ledger holds {} entries", self.ledger.len());
    }

    /// Reset for a genuinely new maze: run reset plus ledger contents.
    pub fn on_new_maze(&mut self) {
        self.on_run_reset();
        self.ledger.clear();
        self.capacity_warned = false;
    }

    /// Capture a context from the environment and decide one heading.
    pub fn decide<E: MazeEnvironment + ?Sized>(&mut self, env: &E) -> Heading {
        let ctx = StepContext::capture(env);
        self.step(&ctx)
    }

    /// Decide one heading from an already captured context.
    pub fn step(&mut self, ctx: &StepContext) -> Heading {
        let heading = self.choose(ctx);
        self.steps_this_run += 1;
        log::trace!(
            "step {} at {} [{}]: face {}",
            self.steps_this_run,
            ctx.position,
            self.mode.name(),
            heading
        );
        heading
    }

    fn choose(&mut self, ctx: &StepContext) -> Heading {
        if ctx.sweep.classify() == Topology::Enclosed {
            // Every direction reads as wall: contradiction in a connected
            // maze. Fall back to a fixed heading rather than halting.
            log::warn!("all four directions read as wall at {}", ctx.position);
            return ctx.heading;
        }

        if !ctx.first_run {
            return self.replay_step(ctx);
        }

        match self.mode {
            NavigationMode::Explore => self.explore_step(ctx),
            NavigationMode::Backtrack => self.backtrack_step(ctx),
            NavigationMode::SeekTarget => self.seek_step(ctx),
        }
    }

    /// First-run exploration.
    fn explore_step(&mut self, ctx: &StepContext) -> Heading {
        match ctx.sweep.classify() {
            Topology::DeadEnd => self.dead_end_step(ctx),
            Topology::Corridor => corridor_heading(ctx),
            Topology::Junction => self.junction_explore(ctx),
            Topology::Enclosed => ctx.heading,
        }
    }

    /// Dead end: turn around. Mid-run the single open direction is the
    /// reverse of the current heading; at the first step of a run the
    /// agent may start facing a wall, so the open direction is taken
    /// directly and exploration continues.
    fn dead_end_step(&mut self, ctx: &StepContext) -> Heading {
        if self.steps_this_run > 0 && self.mode == NavigationMode::Explore {
            log::debug!("dead end at {}, backtracking", ctx.position);
            self.mode = NavigationMode::Backtrack;
        }
        open_direction(ctx)
    }

    /// Junction during exploration: record the first arrival, then prefer
    /// an unexplored passage, falling back to a uniform random open
    /// direction when the junction is exhausted.
    fn junction_explore(&mut self, ctx: &StepContext) -> Heading {
        if ctx.sweep.visited_count() <= 1 {
            let recorded = self
                .ledger
                .record(JunctionEntry::new(ctx.position, ctx.heading));
            if recorded {
                log::debug!(
                    "recorded junction #{} at {} (arrived {})",
                    self.ledger.len(),
                    ctx.position,
                    ctx.heading
                );
            } else if !self.capacity_warned {
                log::warn!(
                    "junction ledger full ({} entries); further junctions will not be recorded",
                    self.ledger.capacity()
                );
                self.capacity_warned = true;
            }
        }

        let passages = headings_with(ctx, |r| r == CellReading::Passage);
        if !passages.is_empty() {
            let chosen = self.pick(&passages);
            self.note_choice(ctx.position, chosen);
            chosen
        } else {
            // Exhausted junction mid-exploration: random re-choice among
            // open directions, accepting redundant revisits over stalling.
            let open = headings_with(ctx, CellReading::is_open);
            self.pick(&open)
        }
    }

    /// Backtracking through recorded junctions.
    fn backtrack_step(&mut self, ctx: &StepContext) -> Heading {
        match ctx.sweep.classify() {
            Topology::DeadEnd => open_direction(ctx),
            Topology::Corridor => corridor_heading(ctx),
            Topology::Junction => {
                let passages = headings_with(ctx, |r| r == CellReading::Passage);
                if !passages.is_empty() {
                    log::debug!("resuming exploration at junction {}", ctx.position);
                    self.mode = NavigationMode::Explore;
                    let chosen = self.pick(&passages);
                    self.note_choice(ctx.position, chosen);
                    return chosen;
                }

                let entry = match self.config.discipline {
                    BacktrackDiscipline::Stack => self.ledger.pop_last(),
                    BacktrackDiscipline::CoordinateScan => {
                        self.ledger.lookup(ctx.position).copied()
                    }
                };

                match entry {
                    Some(entry) => {
                        let back = entry.arrival.reverse();
                        if ctx.reading_toward(back).is_open() {
                            back
                        } else {
                            // Recorded direction is blocked; resume the
                            // forward search instead of facing a wall.
                            log::debug!(
                                "backtrack heading {} blocked at {}, resuming exploration",
                                back,
                                ctx.position
                            );
                            self.mode = NavigationMode::Explore;
                            self.explore_step(ctx)
                        }
                    }
                    None => {
                        log::debug!(
                            "no ledger entry for junction {}, resuming exploration",
                            ctx.position
                        );
                        self.mode = NavigationMode::Explore;
                        self.explore_step(ctx)
                    }
                }
            }
            Topology::Enclosed => ctx.heading,
        }
    }

    /// Repeat run: replay recorded junction choices instead of exploring.
    fn replay_step(&mut self, ctx: &StepContext) -> Heading {
        if self.mode == NavigationMode::SeekTarget {
            return self.seek_step(ctx);
        }

        match ctx.sweep.classify() {
            Topology::DeadEnd => open_direction(ctx),
            Topology::Corridor => corridor_heading(ctx),
            Topology::Junction => {
                let entry = match self.config.discipline {
                    BacktrackDiscipline::Stack => self.ledger.replay_next(),
                    BacktrackDiscipline::CoordinateScan => {
                        self.ledger.lookup(ctx.position).copied()
                    }
                };

                match entry {
                    Some(entry) => {
                        if entry.position != ctx.position {
                            log::debug!(
                                "replay entry recorded at {}, agent at {}",
                                entry.position,
                                ctx.position
                            );
                        }
                        if ctx.reading_toward(entry.chosen).is_open() {
                            entry.chosen
                        } else {
                            // Topology changed since recording; recover by
                            // deciding this cell with the explore rules.
                            log::debug!(
                                "replayed heading {} blocked at {}",
                                entry.chosen,
                                ctx.position
                            );
                            self.junction_explore(ctx)
                        }
                    }
                    None => {
                        log::debug!(
                            "recorded route exhausted at {}, seeking target {}",
                            ctx.position,
                            ctx.target
                        );
                        self.mode = NavigationMode::SeekTarget;
                        self.seek_step(ctx)
                    }
                }
            }
            Topology::Enclosed => ctx.heading,
        }
    }

    /// Greedy compass step toward the target, with a random open fallback
    /// when the greedy heading is walled off so a legal move is always
    /// emitted.
    fn seek_step(&mut self, ctx: &StepContext) -> Heading {
        match seek(ctx.position, ctx.target) {
            Some(heading) if ctx.reading_toward(heading).is_open() => heading,
            Some(heading) => {
                log::debug!(
                    "greedy heading {} blocked at {}, sidestepping",
                    heading,
                    ctx.position
                );
                let open = headings_with(ctx, CellReading::is_open);
                self.pick(&open)
            }
            // Already at the target; the host should have stopped.
            None => ctx.heading,
        }
    }

    /// Keep the junction's recorded choice in sync with the latest
    /// decision so replay follows the final route, not an abandoned one.
    fn note_choice(&mut self, position: GridPoint, chosen: Heading) {
        let updated = match self.config.discipline {
            BacktrackDiscipline::Stack => self.ledger.update_last_choice(position, chosen),
            BacktrackDiscipline::CoordinateScan => self.ledger.update_choice_at(position, chosen),
        };
        if !updated {
            log::trace!("choice at unrecorded junction {}", position);
        }
    }

    /// Uniform random pick among equally valid options. Callers only
    /// pass non-empty slices; an empty slice would mean the enclosed-cell
    /// guard was bypassed, so fall back to north rather than panic.
    fn pick(&mut self, options: &[Heading]) -> Heading {
        if options.is_empty() {
            return Heading::North;
        }
        options[self.rng.random_range(0..options.len())]
    }
}

/// Open headings satisfying a reading predicate, in compass order.
fn headings_with(ctx: &StepContext, pred: impl Fn(CellReading) -> bool) -> Vec<Heading> {
    Heading::ALL
        .into_iter()
        .filter(|h| pred(ctx.reading_toward(*h)))
        .collect()
}

/// Corridor rule: the first unexplored passage in the fixed scan order
/// Ahead→Right→Left, else the first open direction in that order, else
/// behind.
fn corridor_heading(ctx: &StepContext) -> Heading {
    for rel in RelativeDirection::SCAN_ORDER {
        if ctx.sweep.get(rel) == CellReading::Passage {
            return ctx.heading.rotate(rel);
        }
    }
    for rel in RelativeDirection::SCAN_ORDER {
        if ctx.sweep.get(rel).is_open() {
            return ctx.heading.rotate(rel);
        }
    }
    ctx.heading.reverse()
}

/// The first open direction, scanning Ahead, Right, Behind, Left. Used
/// at dead ends, where exactly one direction is open.
fn open_direction(ctx: &StepContext) -> Heading {
    for rel in RelativeDirection::ALL {
        if ctx.sweep.get(rel).is_open() {
            return ctx.heading.rotate(rel);
        }
    }
    ctx.heading
}
