//! Core training engine — card handling, scenario generation and advice.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, positions, action history, scenario snapshots |
//! | `error`     | `TrainerError` and the crate `Result` alias |
//! | `config`    | Generator and advisor tunables, loadable from JSON |
//! | `deck`      | 52-card deck with Fisher-Yates shuffle and dealing without replacement |
//! | `helpers`   | Shared builders for blinds, stacks, pots and scripted lines |
//! | `evaluator` | Board texture classification |
//! | `generator` | `ScenarioGenerator` — one scenario per street, chained by `advance` |
//! | `advisor`   | `GtoAdvisor` — preflop chart lookup, postflop heuristics |

pub mod advisor;
pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod helpers;
pub mod models;

// Re-export the public API surface so callers can use
// `training_engine::ScenarioGenerator` without reaching into sub-modules.
pub use advisor::{
    chart::{ChartAction, ChartBook, ChartEntry},
    hand::{normalize_hand, HandCode},
    ActionReview, AdviceDetails, AdviceResponse, GtoAdvisor, Strategy,
};
pub use config::{AdvisorConfig, GeneratorConfig};
pub use deck::Deck;
pub use error::{Result, TrainerError};
pub use generator::ScenarioGenerator;
pub use models::{
    ActionEvent, ActionKind, Card, Position, Rank, ScenarioState, Stacks, Street, Suit,
    VillainInfo,
};
