//! Tunables for the scenario generator and the advisor.
//!
//! Both configs deserialize from JSON with every field optional, so a caller
//! can override a single value (`{"rng_seed": 42}`) and keep the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::training_engine::error::Result;

pub const DEFAULT_NUM_PLAYERS: usize = 6;
pub const DEFAULT_STACK_SIZE: f64 = 100.0;
pub const SMALL_BLIND: f64 = 0.5;
pub const BIG_BLIND: f64 = 1.0;
pub const PREFLOP_RAISE_SIZE: f64 = 3.0;
pub const FLOP_CBET_SIZE: f64 = 4.0;
pub const TURN_BARREL_SIZE: f64 = 8.0;
pub const DEFAULT_CHART_PROFILE: &str = "RFI_100BB_6MAX";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub num_players: usize,
    /// Starting stack of every seat, in big blinds.
    pub starting_stack: f64,
    pub preflop_raise: f64,
    pub flop_cbet: f64,
    pub turn_barrel: f64,
    /// `Some` makes every scenario reproducible; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            num_players: DEFAULT_NUM_PLAYERS,
            starting_stack: DEFAULT_STACK_SIZE,
            preflop_raise: PREFLOP_RAISE_SIZE,
            flop_cbet: FLOP_CBET_SIZE,
            turn_barrel: TURN_BARREL_SIZE,
            rng_seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn seeded(seed: u64) -> Self {
        GeneratorConfig { rng_seed: Some(seed), ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Top-level key of the chart book to consult, e.g. `RFI_100BB_6MAX`.
    pub chart_profile: String,
    /// Chart JSON on disk; the built-in chart is used when absent.
    pub chart_path: Option<PathBuf>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            chart_profile: DEFAULT_CHART_PROFILE.to_string(),
            chart_path: None,
        }
    }
}

impl AdvisorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
