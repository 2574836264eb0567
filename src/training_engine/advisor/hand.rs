use std::fmt;

use crate::training_engine::{
    error::{Result, TrainerError},
    models::{Card, Rank},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandShape {
    Pair,
    Suited,
    Offsuit,
}

/// A starting hand reduced to its chart key: high rank, low rank, shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandCode {
    pub high: Rank,
    pub low: Rank,
    pub shape: HandShape,
}

impl HandCode {
    pub fn from_cards(cards: &[Card; 2]) -> Self {
        let (a, b) = (cards[0], cards[1]);
        let (high, low) = if a.rank() >= b.rank() { (a.rank(), b.rank()) } else { (b.rank(), a.rank()) };
        let shape = if high == low {
            HandShape::Pair
        } else if a.suit() == b.suit() {
            HandShape::Suited
        } else {
            HandShape::Offsuit
        };
        HandCode { high, low, shape }
    }

    pub fn is_suited(self) -> bool {
        self.shape == HandShape::Suited
    }
}

impl fmt::Display for HandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.shape {
            HandShape::Pair    => "",
            HandShape::Suited  => "s",
            HandShape::Offsuit => "o",
        };
        write!(f, "{}{}{}", self.high, self.low, suffix)
    }
}

/// Normalize two hole-card strings (rank symbols then a suit symbol) into a
/// hand code such as `"AKs"`, `"72o"` or `"TT"`.
///
/// Suits are only compared with each other, so any trailing symbol is accepted.
pub fn normalize_hand<S: AsRef<str>>(hole_cards: &[S]) -> Result<HandCode> {
    let unparseable = || {
        let raw: Vec<&str> = hole_cards.iter().map(|c| c.as_ref()).collect();
        TrainerError::UnparseableHand(raw.join(","))
    };
    let [first, second] = hole_cards else {
        return Err(unparseable());
    };
    let (r1, s1) = split_card(first.as_ref()).ok_or_else(unparseable)?;
    let (r2, s2) = split_card(second.as_ref()).ok_or_else(unparseable)?;

    let (high, low) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
    let shape = if r1 == r2 {
        HandShape::Pair
    } else if s1 == s2 {
        HandShape::Suited
    } else {
        HandShape::Offsuit
    };
    Ok(HandCode { high, low, shape })
}

fn split_card(card: &str) -> Option<(Rank, char)> {
    let mut chars = card.trim().chars();
    let suit = chars.next_back()?;
    let mut rank = chars.as_str().chars();
    match (rank.next(), rank.next()) {
        (Some(symbol), None) => Rank::from_symbol(symbol).map(|r| (r, suit)),
        _ => None,
    }
}
