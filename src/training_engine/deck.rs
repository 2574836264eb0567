use rand::Rng;

use crate::training_engine::{
    error::{Result, TrainerError},
    models::{Card, Rank, Suit},
};

/// A standard 52-card deck. Cards are dealt from the end of the current order
/// and never reappear until the next [`Deck::reset`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck in construction order. Shuffle before dealing.
    pub fn new() -> Self {
        let mut deck = Deck { cards: Vec::with_capacity(52) };
        deck.reset();
        deck
    }

    /// Repopulate with all 52 rank × suit combinations, discarding the prior order.
    pub fn reset(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::from_parts(rank, suit));
            }
        }
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        // Fisher-Yates shuffle
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Deal the topmost undealt card.
    pub fn deal_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(TrainerError::EmptyDeck)
    }

    /// Deal `n` cards at once. Nothing is dealt if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.cards.len() {
            return Err(TrainerError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        (0..n).map(|_| self.deal_one()).collect()
    }

    /// Take `known` cards out of the live deck, e.g. cards already on the table.
    pub fn remove(&mut self, known: &[Card]) {
        self.cards.retain(|c| !known.contains(c));
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remaining cards available.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
