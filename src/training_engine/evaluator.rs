use serde::{Deserialize, Serialize};

use crate::training_engine::models::Card;

/// Describes the texture of a board for human-readable advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardTexture {
    /// No two cards share a suit and nothing is connected.
    Dry,
    /// Either a flush draw or a straight draw is possible.
    SemiWet,
    /// Both flush and straight draws are possible.
    Wet,
}

impl std::fmt::Display for BoardTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardTexture::Dry     => write!(f, "dry"),
            BoardTexture::SemiWet => write!(f, "semi-wet"),
            BoardTexture::Wet     => write!(f, "wet"),
        }
    }
}

/// Classify the texture of up to 5 board cards.
pub fn board_texture(board: &[Card]) -> BoardTexture {
    match (has_flush_draw(board), has_straight_draw(board)) {
        (true, true)   => BoardTexture::Wet,
        (false, false) => BoardTexture::Dry,
        _              => BoardTexture::SemiWet,
    }
}

/// True if 2+ cards share a suit.
pub fn has_flush_draw(board: &[Card]) -> bool {
    board
        .iter()
        .enumerate()
        .any(|(i, a)| board[i + 1..].iter().any(|b| a.suit() == b.suit()))
}

/// True if two distinct ranks sit within a two-rank gap of each other.
pub fn has_straight_draw(board: &[Card]) -> bool {
    let mut ranks: Vec<u8> = board.iter().map(|c| c.value()).collect();
    ranks.sort_unstable();
    ranks.dedup();
    ranks.windows(2).any(|w| w[1] - w[0] <= 2)
}
