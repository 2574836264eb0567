//! Maps a [`ScenarioState`] to recommended play.
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `chart`    | Chart book loading and entry formatting |
//! | `hand`     | Hole cards → hand code (`"AKs"`, `"72o"`, `"TT"`) |
//! | `ranges`   | Ordered generic-range fallbacks (`Axs`, `Q9s+`, ...) |
//! | `preflop`  | Raise-first-in chart advice |
//! | `postflop` | Heuristic flop / turn / river advice |
//!
//! Every advice call returns an [`AdviceResponse`]: either advice text with
//! details, or an error message. Lookup misses never panic and the scenario
//! is only ever read.

pub mod chart;
pub mod hand;
pub mod postflop;
pub mod preflop;
pub mod ranges;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::training_engine::{
    config::AdvisorConfig,
    error::{Result, TrainerError},
    evaluator::BoardTexture,
    models::{ActionKind, Position, ScenarioState, Street},
};
use chart::{ChartBook, ChartEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    RfiChart,
    DefaultFoldRfi,
    UnknownPreflopSituation,
    GeneralHeuristicFlop,
    GeneralHeuristicTurn,
    GeneralHeuristicRiver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceDetails {
    pub strategy: Strategy,
    /// Normalized hero hand, preflop only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<String>,
    /// Chart key that matched: the hand itself or a generic range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_entry: Option<ChartEntry>,
    #[serde(default, rename = "heroIsPFR", skip_serializing_if = "Option::is_none")]
    pub hero_is_pfr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_to_act: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_texture: Option<BoardTexture>,
}

impl AdviceDetails {
    pub fn new(strategy: Strategy) -> Self {
        AdviceDetails {
            strategy,
            hand: None,
            chart_key: None,
            chart_entry: None,
            hero_is_pfr: None,
            next_to_act: None,
            board_texture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub text: String,
    pub details: AdviceDetails,
}

/// `{advice, details}` or `{error}`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdviceResponse {
    Advice { advice: String, details: AdviceDetails },
    Error { error: String },
}

impl AdviceResponse {
    pub fn advice(&self) -> Option<&str> {
        match self {
            AdviceResponse::Advice { advice, .. } => Some(advice),
            AdviceResponse::Error { .. } => None,
        }
    }

    pub fn details(&self) -> Option<&AdviceDetails> {
        match self {
            AdviceResponse::Advice { details, .. } => Some(details),
            AdviceResponse::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AdviceResponse::Error { error } => Some(error),
            AdviceResponse::Advice { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AdviceResponse::Error { .. })
    }
}

impl From<Result<Advice>> for AdviceResponse {
    fn from(result: Result<Advice>) -> Self {
        match result {
            Ok(Advice { text, details }) => AdviceResponse::Advice { advice: text, details },
            Err(e) => {
                log::warn!("advice unavailable: {}", e);
                AdviceResponse::Error { error: e.to_string() }
            }
        }
    }
}

/// A submitted user action echoed back with the advice for the spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionReview {
    pub your_action: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_amount: Option<f64>,
    pub gto_advice: AdviceResponse,
}

/// Stateless advisor over an immutable, shared chart book.
#[derive(Debug, Clone)]
pub struct GtoAdvisor {
    charts: Arc<ChartBook>,
    profile: String,
}

impl GtoAdvisor {
    pub fn new(charts: Arc<ChartBook>) -> Self {
        Self::with_profile(charts, AdvisorConfig::default().chart_profile)
    }

    pub fn with_profile(charts: Arc<ChartBook>, profile: impl Into<String>) -> Self {
        GtoAdvisor { charts, profile: profile.into() }
    }

    /// Load the configured chart once; a bad path yields an empty book.
    pub fn from_config(config: &AdvisorConfig) -> Self {
        let charts = match &config.chart_path {
            Some(path) => ChartBook::load_or_empty(path),
            None => ChartBook::builtin(),
        };
        Self::with_profile(Arc::new(charts), config.chart_profile.clone())
    }

    pub fn charts(&self) -> &Arc<ChartBook> {
        &self.charts
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Route to the advisor for the scenario's street.
    pub fn advise(&self, state: &ScenarioState) -> AdviceResponse {
        match state.scenario_type {
            Street::Preflop => self.preflop_advice(state),
            Street::Flop    => self.flop_advice(state),
            Street::Turn    => self.turn_advice(state),
            Street::River   => self.river_advice(state),
        }
    }

    /// Advice for a user's submitted action.
    pub fn review(&self, state: &ScenarioState, action: ActionKind, amount: Option<f64>) -> ActionReview {
        log::info!(
            "{} action from {} holding {}{}: {}{}",
            state.scenario_type,
            state.hero_position,
            state.hero_hole_cards[0],
            state.hero_hole_cards[1],
            action,
            amount.map(|a| format!(" {a}")).unwrap_or_default(),
        );
        ActionReview { your_action: action, your_amount: amount, gto_advice: self.advise(state) }
    }
}

fn expect_street(state: &ScenarioState, expected: Street) -> Result<()> {
    if state.scenario_type == expected {
        Ok(())
    } else {
        Err(TrainerError::StreetMismatch { expected, found: state.scenario_type })
    }
}
