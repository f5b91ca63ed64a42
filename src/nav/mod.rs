//! Maze navigation: the decision engine, junction ledger, and target
//! heuristic.
//!
//! [`NavEngine`] owns three modes (Explore, Backtrack, SeekTarget) and
//! emits one absolute heading per host step. Junction decisions made
//! while exploring are recorded in the [`JunctionLedger`] so that
//! backtracking can unwind them and repeat runs of the same maze can
//! replay them instead of re-exploring.

mod engine;
mod ledger;
mod seek;

pub use engine::{NavEngine, NavigationMode, StepContext};
pub use ledger::{JunctionEntry, JunctionLedger};
pub use seek::seek;
