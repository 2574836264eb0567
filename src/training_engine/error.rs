use thiserror::Error;

use crate::training_engine::models::{Position, Street};

pub type Result<T, E = TrainerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("invalid card: {0}")]
    InvalidCard(String),
    #[error("deck is empty, cannot deal")]
    EmptyDeck,
    #[error("cannot deal {requested} cards, only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("only 6-max tables are supported, got {0} players")]
    UnsupportedTableSize(usize),
    #[error("could not normalize hand: {0}")]
    UnparseableHand(String),
    #[error("no RFI chart for position: {0}")]
    NoChartForPosition(Position),
    #[error("invalid scenario: expected a {expected} scenario, got {found}")]
    StreetMismatch { expected: Street, found: Street },
    #[error("cannot advance a {0} scenario to a later street")]
    CannotAdvance(Street),
    #[error("chart format: {0}")]
    ChartFormat(#[from] serde_json::Error),
    #[error("chart io: {0}")]
    ChartIo(#[from] std::io::Error),
}
