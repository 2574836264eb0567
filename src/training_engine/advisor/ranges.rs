//! Generic chart entries consulted when a hand has no entry of its own.
//!
//! The table is evaluated top to bottom; the first range that contains the
//! hand *and* is present in the position's chart wins.

use crate::training_engine::{
    advisor::hand::HandCode,
    models::Rank,
};

pub struct GenericRange {
    /// Chart key, e.g. `"Q9s+"`.
    pub key: &'static str,
    pub contains: fn(HandCode) -> bool,
}

fn suited_with_high(hand: HandCode, high: Rank, min_low: Rank) -> bool {
    hand.is_suited() && hand.high == high && hand.low >= min_low
}

pub static GENERIC_RANGES: [GenericRange; 5] = [
    GenericRange { key: "Axs",  contains: |h| suited_with_high(h, Rank::ACE, Rank::TWO) },
    GenericRange { key: "Kxs",  contains: |h| suited_with_high(h, Rank::KING, Rank::TWO) },
    GenericRange { key: "Q9s+", contains: |h| suited_with_high(h, Rank::QUEEN, Rank::NINE) },
    GenericRange { key: "J9s+", contains: |h| suited_with_high(h, Rank::JACK, Rank::NINE) },
    GenericRange { key: "T8s+", contains: |h| suited_with_high(h, Rank::TEN, Rank::EIGHT) },
];

/// Generic ranges containing `hand`, in evaluation order.
pub fn matching_ranges(hand: HandCode) -> impl Iterator<Item = &'static str> {
    GENERIC_RANGES.iter().filter(move |r| (r.contains)(hand)).map(|r| r.key)
}
