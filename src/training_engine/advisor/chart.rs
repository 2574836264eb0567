//! Preflop open-raise charts, keyed `{profile: {position: {hand: entry}}}`.
//!
//! A chart book is loaded once and then only read. Loading never fails the
//! caller: malformed or missing data degrades to an empty book, under which
//! every lookup misses and the advisor falls back to folding.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::training_engine::{error::Result, models::Position};

const BUILTIN_CHARTS: &str = include_str!("../../../charts/rfi_charts.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartAction {
    Raise,
    Call,
    Fold,
}

impl fmt::Display for ChartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartAction::Raise => write!(f, "raise"),
            ChartAction::Call  => write!(f, "call"),
            ChartAction::Fold  => write!(f, "fold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub action: ChartAction,
    /// 0.0..=1.0
    pub frequency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<ChartAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_frequency: Option<f64>,
}

impl ChartEntry {
    pub fn pure(action: ChartAction) -> Self {
        ChartEntry { action, frequency: 1.0, alternative: None, alt_frequency: None }
    }

    /// `"raise (65%) or fold (35%)"`
    pub fn describe(&self) -> String {
        let mut text = format!("{} ({})", self.action, percent(self.frequency));
        if let Some(alt) = self.alternative {
            text.push_str(&format!(" or {} ({})", alt, percent(self.alt_frequency.unwrap_or(0.0))));
        }
        text
    }
}

fn percent(frequency: f64) -> String {
    format!("{:.0}%", (frequency * 100.0).round())
}

pub type PositionChart = BTreeMap<String, ChartEntry>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartBook {
    profiles: BTreeMap<String, BTreeMap<String, PositionChart>>,
}

impl ChartBook {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let book: ChartBook = serde_json::from_str(json)?;
        for (profile, positions) in &book.profiles {
            log::info!("loaded chart profile {} with {} positions", profile, positions.len());
        }
        Ok(book)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Like [`ChartBook::load`], but any failure yields an empty book.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("error loading charts from {}: {}", path.display(), e);
            Self::empty()
        })
    }

    /// The chart book shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_CHARTS).unwrap_or_else(|e| {
            log::warn!("error loading built-in charts: {}", e);
            Self::empty()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn position_chart(&self, profile: &str, position: Position) -> Option<&PositionChart> {
        self.profiles.get(profile)?.get(position.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_book_has_open_raising_seats() {
        let book = ChartBook::builtin();
        assert_eq!(book.profile_names().collect::<Vec<_>>(), ["RFI_100BB_6MAX"]);
        for position in [Position::UTG, Position::MP, Position::CO, Position::BTN, Position::SB] {
            assert!(book.position_chart("RFI_100BB_6MAX", position).is_some(), "{position}");
        }
        assert!(book.position_chart("RFI_100BB_6MAX", Position::BB).is_none());
        let aa = &book.position_chart("RFI_100BB_6MAX", Position::BTN).unwrap()["AA"];
        assert_eq!(aa, &ChartEntry::pure(ChartAction::Raise));
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        assert!(ChartBook::from_json_str("{\"RFI\": 3}").is_err());
        let book = ChartBook::load_or_empty("/nonexistent/charts.json");
        assert!(book.is_empty());
        assert!(book.position_chart("RFI_100BB_6MAX", Position::BTN).is_none());
    }

    #[test]
    fn describe_includes_alternative() {
        let entry = ChartEntry {
            action: ChartAction::Raise,
            frequency: 0.65,
            alternative: Some(ChartAction::Fold),
            alt_frequency: Some(0.35),
        };
        assert_eq!(entry.describe(), "raise (65%) or fold (35%)");
        assert_eq!(ChartEntry::pure(ChartAction::Fold).describe(), "fold (100%)");
    }
}
