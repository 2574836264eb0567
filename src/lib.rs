//! # poker_trainer
//!
//! Synthetic hold'em spots for practising decisions street by street, with a
//! recommendation for whatever action the player submits.
//!
//! ## How it works
//!
//! 1. Build a [`ScenarioGenerator`] from a [`GeneratorConfig`] (6-max only).
//! 2. Call `generate_preflop`, `generate_flop`, `generate_turn` or
//!    `generate_river`. Each call resets and reshuffles the generator's deck
//!    and returns a self-contained [`ScenarioState`] snapshot.
//! 3. Hand the snapshot to a [`GtoAdvisor`]. Preflop raise-first-in spots are
//!    answered from a chart book; flop, turn and river get heuristic text.
//!
//! ## Key features
//!
//! - **Deterministic**: `GeneratorConfig { rng_seed: Some(u64), .. }`
//!   reproduces the exact same sequence of scenarios.
//! - **Chained streets**: [`ScenarioGenerator::advance`] derives the turn from
//!   a flop snapshot (and the river from a turn) without mutating it.
//! - **Load once**: the chart book sits behind an `Arc` and is only read, so
//!   one advisor can be cloned across threads.
//! - **Never throws on a miss**: unknown positions, street mismatches and
//!   hands outside the chart come back as an error message or a default fold.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_trainer::{AdvisorConfig, GeneratorConfig, GtoAdvisor, ScenarioGenerator};
//!
//! let mut generator = ScenarioGenerator::new(GeneratorConfig::seeded(42)).unwrap();
//! let advisor = GtoAdvisor::from_config(&AdvisorConfig::default());
//!
//! let flop = generator.generate_flop().unwrap();
//! let turn = generator.advance(&flop).unwrap();
//! assert_eq!(turn.community_cards.len(), 4);
//!
//! let response = advisor.advise(&flop);
//! println!("{}", response.advice().unwrap_or("no advice"));
//! ```

pub mod training_engine;

// Convenience re-exports so callers can use `poker_trainer::GtoAdvisor`
// directly without reaching into `training_engine::`.
pub use training_engine::{
    normalize_hand, ActionEvent, ActionKind, ActionReview, AdviceDetails, AdviceResponse,
    AdvisorConfig, Card, ChartAction, ChartBook, ChartEntry, Deck, GeneratorConfig, GtoAdvisor,
    HandCode, Position, Rank, ScenarioGenerator, ScenarioState, Stacks, Street, Strategy, Suit,
    TrainerError, VillainInfo,
};

#[cfg(test)]
mod tests;
