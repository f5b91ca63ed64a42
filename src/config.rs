//! Engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default bound on recorded junction decisions.
pub const DEFAULT_LEDGER_CAPACITY: usize = 10_000;

/// How recorded junctions are consulted during backtracking and replay.
///
/// Chosen once per engine and applied consistently; the two disciplines
/// are never mixed within a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacktrackDiscipline {
    /// LIFO: backtracking pops the most recent entry, replay walks the
    /// surviving entries sequentially by cursor.
    #[default]
    Stack,
    /// Coordinate-keyed: backtracking and replay both scan for the most
    /// recent entry recorded at the current position; entries are never
    /// removed.
    CoordinateScan,
}

/// Navigation engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of junction decisions the ledger retains. Once
    /// full, new junctions are not recorded and the agent may re-explore
    /// that region when backtracking.
    #[serde(default = "default_ledger_capacity")]
    pub ledger_capacity: usize,

    /// Ledger discipline for backtracking and replay.
    #[serde(default)]
    pub discipline: BacktrackDiscipline,

    /// Fixed RNG seed for tie-breaking among equally valid directions.
    /// `None` seeds from the OS; tests fix this for determinism.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_ledger_capacity() -> usize {
    DEFAULT_LEDGER_CAPACITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ledger_capacity: default_ledger_capacity(),
            discipline: BacktrackDiscipline::default(),
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Convenience constructor with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }
}
