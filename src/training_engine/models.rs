use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::training_engine::error::TrainerError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Accepts the ASCII letter or the Unicode glyph.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        match symbol {
            'h' | '♥' => Some(Suit::Hearts),
            'd' | '♦' => Some(Suit::Diamonds),
            'c' | '♣' => Some(Suit::Clubs),
            's' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rank 2..=14 where 14 = Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const EIGHT: Rank = Rank(8);
    pub const NINE: Rank = Rank(9);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// Ascending, deuce first.
    pub const ALL: [Rank; 13] = [
        Rank(2), Rank(3), Rank(4), Rank(5), Rank(6), Rank(7), Rank(8),
        Rank(9), Rank(10), Rank(11), Rank(12), Rank(13), Rank(14),
    ];

    pub fn from_symbol(symbol: char) -> Option<Rank> {
        let value = match symbol {
            '2'..='9' => symbol as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }

    /// Comparison value, 2..=14.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn symbol(self) -> char {
        match self.0 {
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            14 => 'A',
            v => (b'0' + v) as char,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An immutable playing card. Serialized as its canonical string, e.g. `"Td"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Build a card from its suit and rank symbols.
    pub fn new(suit: char, rank: char) -> Result<Card, TrainerError> {
        match (Suit::from_symbol(suit), Rank::from_symbol(rank)) {
            (Some(suit), Some(rank)) => Ok(Card { rank, suit }),
            _ => Err(TrainerError::InvalidCard(format!("{rank}{suit}"))),
        }
    }

    pub(crate) fn from_parts(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Card::new(suit, rank),
            _ => Err(TrainerError::InvalidCard(s.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = TrainerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

// ---------------------------------------------------------------------------
// Table metadata
// ---------------------------------------------------------------------------

/// 6-max seats, declared in preflop acting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    UTG,
    MP,
    CO,
    BTN,
    SB,
    BB,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::UTG, Position::MP, Position::CO,
        Position::BTN, Position::SB, Position::BB,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::MP  => "MP",
            Position::CO  => "CO",
            Position::BTN => "BTN",
            Position::SB  => "SB",
            Position::BB  => "BB",
        }
    }

    pub fn is_blind(self) -> bool {
        matches!(self, Position::SB | Position::BB)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Number of community cards visible on this street.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop    => 3,
            Street::Turn    => 4,
            Street::River   => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "preflop",
            Street::Flop    => "flop",
            Street::Turn    => "turn",
            Street::River   => "river",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Action history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PostsSb,
    PostsBb,
    Fold,
    Call,
    Check,
    Bet,
    Raise,
}

impl ActionKind {
    pub fn is_blind_post(self) -> bool {
        matches!(self, ActionKind::PostsSb | ActionKind::PostsBb)
    }

    pub fn is_aggressive(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }

    /// Actions that put chips in the pot and therefore carry an amount.
    pub fn is_monetary(self) -> bool {
        !matches!(self, ActionKind::Fold | ActionKind::Check)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::PostsSb => "posts_sb",
            ActionKind::PostsBb => "posts_bb",
            ActionKind::Fold    => "fold",
            ActionKind::Call    => "call",
            ActionKind::Check   => "check",
            ActionKind::Bet     => "bet",
            ActionKind::Raise   => "raise",
        };
        write!(f, "{}", s)
    }
}

/// One entry of the action history. Preflop entries carry no street tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<Street>,
    pub player: Position,
    pub action: ActionKind,
    /// Big blinds committed by this action; present only for monetary actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl ActionEvent {
    pub fn posts_sb(amount: f64) -> Self {
        Self::wager(Position::SB, ActionKind::PostsSb, amount)
    }

    pub fn posts_bb(amount: f64) -> Self {
        Self::wager(Position::BB, ActionKind::PostsBb, amount)
    }

    pub fn fold(player: Position) -> Self {
        ActionEvent { street: None, player, action: ActionKind::Fold, amount: None }
    }

    pub fn check(player: Position) -> Self {
        ActionEvent { street: None, player, action: ActionKind::Check, amount: None }
    }

    pub fn wager(player: Position, action: ActionKind, amount: f64) -> Self {
        ActionEvent { street: None, player, action, amount: Some(amount) }
    }

    /// Tag the event with a postflop street.
    pub fn on(mut self, street: Street) -> Self {
        self.street = (street != Street::Preflop).then_some(street);
        self
    }

    pub fn committed(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Scenario snapshot
// ---------------------------------------------------------------------------

/// Remaining big blinds per seat.
pub type Stacks = BTreeMap<Position, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillainInfo {
    pub position: Position,
    pub hole_cards: [Card; 2],
}

/// A street-scoped game state. Later streets are derived from earlier
/// snapshots by copying, never by editing a returned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioState {
    pub scenario_type: Street,
    pub num_players: usize,
    pub hero_position: Position,
    pub hero_hole_cards: [Card; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villain_info: Option<VillainInfo>,
    pub stacks: Stacks,
    pub community_cards: Vec<Card>,
    pub pot: f64,
    pub action_history: Vec<ActionEvent>,
    pub next_to_act: Position,
}

impl ScenarioState {
    /// Sum of every committed amount in the history, blinds included.
    pub fn committed_total(&self) -> f64 {
        self.action_history.iter().map(ActionEvent::committed).sum()
    }

    /// Every card visible to the scenario: hole cards of both players and the board.
    pub fn known_cards(&self) -> Vec<Card> {
        let mut cards = self.hero_hole_cards.to_vec();
        if let Some(villain) = &self.villain_info {
            cards.extend_from_slice(&villain.hole_cards);
        }
        cards.extend_from_slice(&self.community_cards);
        cards
    }

    pub fn villain_position(&self) -> Option<Position> {
        self.villain_info.as_ref().map(|v| v.position)
    }
}
