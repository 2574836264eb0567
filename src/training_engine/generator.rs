//! Street-by-street scenario generation.
//!
//! A [`ScenarioGenerator`] owns one [`Deck`] and one RNG. Every `generate_*`
//! call resets and reshuffles the deck first, so nothing leaks between calls.
//! Later streets are derived with [`ScenarioGenerator::advance`], which takes
//! the prior snapshot by reference and returns a new one.
//!
//! Methods take `&mut self`; a generator serves one request at a time.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    config::{GeneratorConfig, BIG_BLIND, DEFAULT_NUM_PLAYERS},
    deck::Deck,
    error::{Result, TrainerError},
    helpers::{apply_commitments, blind_posts, check_bet_call, pot_of, stacks_after},
    models::*,
};

const FLOP_HERO: Position = Position::BTN;
const FLOP_VILLAIN: Position = Position::BB;

pub struct ScenarioGenerator<R = StdRng> {
    config: GeneratorConfig,
    deck: Deck,
    rng: R,
}

impl ScenarioGenerator<StdRng> {
    /// Build a generator from `config`, seeding the RNG when a seed is given.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> ScenarioGenerator<R> {
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        if config.num_players != DEFAULT_NUM_PLAYERS {
            return Err(TrainerError::UnsupportedTableSize(config.num_players));
        }
        Ok(ScenarioGenerator { config, deck: Deck::new(), rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Dispatch to the generator for `street`.
    pub fn generate(&mut self, street: Street) -> Result<ScenarioState> {
        match street {
            Street::Preflop => self.generate_preflop(),
            Street::Flop    => self.generate_flop(),
            Street::Turn    => self.generate_turn(),
            Street::River   => self.generate_river(),
        }
    }

    fn fresh_deck(&mut self) {
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
    }

    // Draw budgets are fixed well under 52, so exhaustion means a broken invariant.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        self.deck
            .deal(n)
            .inspect_err(|e| log::error!("deck exhausted mid-scenario: {}", e))
    }

    fn draw_one(&mut self) -> Result<Card> {
        self.deck
            .deal_one()
            .inspect_err(|e| log::error!("deck exhausted mid-scenario: {}", e))
    }

    fn deal_pair(&mut self) -> Result<[Card; 2]> {
        Ok([self.draw_one()?, self.draw_one()?])
    }

    /// Everyone folds to a random hero, who decides whether to open.
    pub fn generate_preflop(&mut self) -> Result<ScenarioState> {
        self.fresh_deck();

        let hero_position = Position::ALL[self.rng.gen_range(0..Position::ALL.len())];
        let hero_hole_cards = self.deal_pair()?;

        let mut action_history = blind_posts();
        action_history.extend(
            Position::ALL
                .iter()
                .take_while(|&&p| p != hero_position)
                .filter(|p| !p.is_blind())
                .map(|&p| ActionEvent::fold(p)),
        );

        log::debug!("preflop scenario: hero {} holds {}{}", hero_position, hero_hole_cards[0], hero_hole_cards[1]);

        Ok(ScenarioState {
            scenario_type: Street::Preflop,
            num_players: self.config.num_players,
            hero_position,
            hero_hole_cards,
            villain_info: None,
            stacks: stacks_after(self.config.starting_stack, &action_history),
            community_cards: Vec::new(),
            pot: pot_of(&action_history),
            action_history,
            next_to_act: hero_position,
        })
    }

    /// BTN opens, BB calls; hero is BTN and BB acts first on the flop.
    pub fn generate_flop(&mut self) -> Result<ScenarioState> {
        self.fresh_deck();

        let hero_hole_cards = self.deal_pair()?;
        let villain_hole_cards = self.deal_pair()?;

        let raise = self.config.preflop_raise;
        let mut action_history = blind_posts();
        action_history.extend([
            ActionEvent::fold(Position::UTG),
            ActionEvent::fold(Position::MP),
            ActionEvent::fold(Position::CO),
            ActionEvent::wager(FLOP_HERO, ActionKind::Raise, raise),
            ActionEvent::fold(Position::SB),
            // BB already has the blind in.
            ActionEvent::wager(FLOP_VILLAIN, ActionKind::Call, raise - BIG_BLIND),
        ]);

        self.draw_one()?; // burn
        let community_cards = self.draw(Street::Flop.board_len())?;

        log::debug!("flop scenario dealt, {} cards left in deck", self.deck.remaining());

        Ok(ScenarioState {
            scenario_type: Street::Flop,
            num_players: 2,
            hero_position: FLOP_HERO,
            hero_hole_cards,
            villain_info: Some(VillainInfo { position: FLOP_VILLAIN, hole_cards: villain_hole_cards }),
            stacks: stacks_after(self.config.starting_stack, &action_history),
            community_cards,
            pot: pot_of(&action_history),
            action_history,
            next_to_act: FLOP_VILLAIN,
        })
    }

    /// A fresh flop scenario advanced through a check, c-bet, call line.
    pub fn generate_turn(&mut self) -> Result<ScenarioState> {
        let flop = self.generate_flop()?;
        self.advance(&flop)
    }

    /// A fresh turn scenario advanced through a check, barrel, call line.
    pub fn generate_river(&mut self) -> Result<ScenarioState> {
        let turn = self.generate_turn()?;
        self.advance(&turn)
    }

    /// Derive the next street from `prior` without touching it.
    ///
    /// The deck is rebuilt without every card the snapshot already shows and
    /// reshuffled; then the scripted line for `prior`'s street is appended
    /// (villain checks, hero bets, villain calls), one card is burned and one
    /// dealt. Only flop and turn snapshots with a villain can be advanced.
    pub fn advance(&mut self, prior: &ScenarioState) -> Result<ScenarioState> {
        let street = prior.scenario_type;
        let (next, size) = match street {
            Street::Flop => (Street::Turn, self.config.flop_cbet),
            Street::Turn => (Street::River, self.config.turn_barrel),
            _ => return Err(TrainerError::CannotAdvance(street)),
        };
        let villain = prior.villain_position().ok_or(TrainerError::CannotAdvance(street))?;

        self.fresh_deck();
        self.deck.remove(&prior.known_cards());

        let line = check_bet_call(street, prior.hero_position, villain, size);

        let mut state = prior.clone();
        apply_commitments(&mut state.stacks, &line);
        state.pot += pot_of(&line);
        state.action_history.extend(line);

        self.draw_one()?; // burn
        state.community_cards.push(self.draw_one()?);
        state.scenario_type = next;
        state.next_to_act = villain;

        log::debug!("advanced {} scenario to {}, pot {}", street, next, state.pot);
        Ok(state)
    }
}
