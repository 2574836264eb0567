//! Heuristic advice for the flop, turn and river.
//!
//! Flop text branches on whether hero was the preflop aggressor and on who
//! acts next. Turn and river text only depends on the street.

use crate::training_engine::{
    advisor::{expect_street, Advice, AdviceDetails, AdviceResponse, GtoAdvisor, Strategy},
    config::BIG_BLIND,
    error::Result,
    evaluator::board_texture,
    models::{ActionKind, Position, ScenarioState, Street},
};

const TURN_ADVICE: &str = "Turn play builds on flop action. Re-evaluate your hand strength and perceived ranges after the turn card.\n\
Consider if the turn card changes the board texture significantly (e.g., completes draws, brings overcards).\n\
If you were aggressive on the flop and got called, decide whether to continue aggression (barrel) for value or as a bluff.\n\
If facing aggression, pot odds and equity become even more critical.";

const RIVER_ADVICE: &str = "River play is often about clear value betting or bluffing, as draws are now complete (or missed).\n\
If you have a strong hand, bet for value. Size your bet based on what you think your opponent can call.\n\
If you missed your draw or have a weak hand, consider bluffing if the story makes sense and opponent might fold a better hand.\n\
If facing a bet, carefully consider pot odds and your opponent's likely holdings. Hero calling with bluff-catchers can be tricky.";

/// Whether hero made the last preflop raise.
///
/// Two checks, either one suffices: the last preflop bet or raise (blinds and
/// folds ignored) belongs to hero, or hero on the BTN raised and the BB
/// villain called exactly the raise minus the posted blind.
pub fn hero_is_preflop_aggressor(state: &ScenarioState) -> bool {
    let history = &state.action_history;

    let last_aggressor = history
        .iter()
        .filter(|e| e.street.is_none())
        .filter(|e| !e.action.is_blind_post() && e.action != ActionKind::Fold)
        .rev()
        .find(|e| e.action.is_aggressive())
        .map(|e| e.player);
    if last_aggressor == Some(state.hero_position) {
        return true;
    }

    if state.hero_position != Position::BTN || state.villain_position() != Some(Position::BB) {
        return false;
    }
    let Some(raise) = history
        .iter()
        .find(|e| e.player == state.hero_position && e.action == ActionKind::Raise)
        .and_then(|e| e.amount)
    else {
        return false;
    };
    history.iter().any(|e| {
        e.player == Position::BB
            && e.action == ActionKind::Call
            && e.amount.is_some_and(|a| (a - (raise - BIG_BLIND)).abs() < f64::EPSILON)
    })
}

impl GtoAdvisor {
    pub fn flop_advice(&self, state: &ScenarioState) -> AdviceResponse {
        expect_street(state, Street::Flop).map(|()| flop(state)).into()
    }

    pub fn turn_advice(&self, state: &ScenarioState) -> AdviceResponse {
        expect_street(state, Street::Turn)
            .map(|()| fixed(state, TURN_ADVICE, Strategy::GeneralHeuristicTurn))
            .into()
    }

    pub fn river_advice(&self, state: &ScenarioState) -> AdviceResponse {
        expect_street(state, Street::River)
            .map(|()| fixed(state, RIVER_ADVICE, Strategy::GeneralHeuristicRiver))
            .into()
    }
}

fn flop(state: &ScenarioState) -> Advice {
    let hero_is_pfr = hero_is_preflop_aggressor(state);
    let hero_to_act = state.next_to_act == state.hero_position;
    let villain_to_act = Some(state.next_to_act) == state.villain_position();

    let mut text = String::from("Flop play strategy is highly contextual.\n");
    if hero_is_pfr {
        text.push_str("As PFR: ");
        if hero_to_act {
            text.push_str("Opponent checked. Consider board texture, hand strength. C-betting common, especially IP or on favorable boards.");
        } else if villain_to_act {
            text.push_str("Waiting for OOP opponent. If they check, decision is on you. If they bet (donk), proceed cautiously.");
        }
    } else {
        text.push_str("As pre-flop caller: ");
        if hero_to_act {
            text.push_str("PFR checked. Consider betting for value/bluff (probe/float), especially if IP. Or check OOP to keep pot small.");
        } else if villain_to_act {
            text.push_str("Waiting for PFR. Face a c-bet with strong hands/draws. Fold weaker holdings.");
        }
    }
    text.push_str("\nTips: Consider board texture, #opponents, SPR.");

    let mut details = AdviceDetails::new(Strategy::GeneralHeuristicFlop);
    details.hero_is_pfr = Some(hero_is_pfr);
    details.next_to_act = Some(state.next_to_act);
    details.board_texture = Some(board_texture(&state.community_cards));
    Advice { text, details }
}

fn fixed(state: &ScenarioState, text: &str, strategy: Strategy) -> Advice {
    let mut details = AdviceDetails::new(strategy);
    details.board_texture = Some(board_texture(&state.community_cards));
    Advice { text: text.to_string(), details }
}
