//! Shared builder functions used by the scenario generator.
//!
//! Every street assembles the same pieces: blind posts, stack bookkeeping,
//! a scripted betting line and printable card strings. These helpers keep
//! `generator.rs` focused on the order of draws.

use crate::training_engine::{
    config::{BIG_BLIND, SMALL_BLIND},
    models::*,
};

/// SB then BB blind posts, the first two entries of every history.
pub fn blind_posts() -> Vec<ActionEvent> {
    vec![ActionEvent::posts_sb(SMALL_BLIND), ActionEvent::posts_bb(BIG_BLIND)]
}

/// Every seat at `starting` big blinds, minus what `history` committed.
pub fn stacks_after(starting: f64, history: &[ActionEvent]) -> Stacks {
    let mut stacks: Stacks = Position::ALL.iter().map(|&p| (p, starting)).collect();
    apply_commitments(&mut stacks, history);
    stacks
}

/// Deduct each event's committed amount from its player's stack.
pub fn apply_commitments(stacks: &mut Stacks, events: &[ActionEvent]) {
    for event in events {
        if let Some(stack) = stacks.get_mut(&event.player) {
            *stack -= event.committed();
        }
    }
}

/// Running pot of `events`.
pub fn pot_of(events: &[ActionEvent]) -> f64 {
    events.iter().map(ActionEvent::committed).sum()
}

/// The scripted postflop line: villain checks, hero bets `size`, villain calls.
pub fn check_bet_call(street: Street, hero: Position, villain: Position, size: f64) -> [ActionEvent; 3] {
    [
        ActionEvent::check(villain).on(street),
        ActionEvent::wager(hero, ActionKind::Bet, size).on(street),
        ActionEvent::wager(villain, ActionKind::Call, size).on(street),
    ]
}

/// Format a hand as string (e.g. "AcKs").
pub fn hand_str(hand: &[Card; 2]) -> String {
    format!("{}{}", hand[0], hand[1])
}

/// Format a board as space-separated string (e.g. "Ac Ks 7h").
pub fn board_str(board: &[Card]) -> String {
    board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_deduct_blinds() {
        let stacks = stacks_after(100.0, &blind_posts());
        assert_eq!(stacks.len(), 6);
        assert_eq!(stacks[&Position::SB], 99.5);
        assert_eq!(stacks[&Position::BB], 99.0);
        assert_eq!(stacks[&Position::UTG], 100.0);
    }

    #[test]
    fn scripted_line_is_tagged_and_balanced() {
        let line = check_bet_call(Street::Flop, Position::BTN, Position::BB, 4.0);
        assert!(line.iter().all(|e| e.street == Some(Street::Flop)));
        assert_eq!(pot_of(&line), 8.0);
        assert_eq!(line[0].amount, None);
    }

    #[test]
    fn board_is_space_separated() {
        let board: Vec<Card> = ["Ac", "Ks", "7h"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(board_str(&board), "Ac Ks 7h");
        assert_eq!(hand_str(&[board[0], board[1]]), "AcKs");
    }
}
