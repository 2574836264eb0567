//! Crate-level tests for `poker_trainer`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Snapshot invariants | Board length per street, hero/villain seats, pot equals committed chips, six stacks |
//! | Deck integrity | No card appears twice across hole cards and board |
//! | Independence | Repeated river generation yields separate, self-consistent states |
//! | Wire format | camelCase field names, string cards, snake_case actions |
//! | Advisor | Built-in chart lookups, dispatch, action review, sharing across threads |

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::training_engine::{
    AdvisorConfig, ActionEvent, ActionKind, Card, ChartAction, ChartBook, ChartEntry,
    GeneratorConfig, GtoAdvisor, Position, ScenarioGenerator, ScenarioState, Street, Strategy,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn generator(seed: u64) -> ScenarioGenerator {
    ScenarioGenerator::new(GeneratorConfig::seeded(seed)).unwrap()
}

fn advisor() -> GtoAdvisor {
    GtoAdvisor::from_config(&AdvisorConfig::default())
}

const STREETS: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn assert_consistent(s: &ScenarioState) {
    assert_eq!(s.community_cards.len(), s.scenario_type.board_len(), "{:?}", s.scenario_type);
    assert_eq!(s.pot, s.committed_total(), "pot must equal committed chips");
    assert_eq!(s.stacks.keys().copied().collect::<Vec<_>>(), Position::ALL.to_vec());

    let known = s.known_cards();
    let unique: HashSet<Card> = known.iter().copied().collect();
    assert_eq!(unique.len(), known.len(), "duplicate card in {known:?}");

    for event in &s.action_history {
        assert_eq!(event.amount.is_some(), event.action.is_monetary(), "{event:?}");
    }
}

// ── snapshot invariants ──────────────────────────────────────────────────────

#[test]
fn every_street_yields_a_consistent_snapshot() {
    for seed in SEEDS {
        let mut g = generator(seed);
        for street in STREETS {
            let s = g.generate(street).unwrap();
            assert_eq!(s.scenario_type, street);
            assert_consistent(&s);
        }
    }
}

#[test]
fn postflop_streets_are_btn_versus_bb() {
    let mut g = generator(21);
    for street in [Street::Flop, Street::Turn, Street::River] {
        for _ in 0..10 {
            let s = g.generate(street).unwrap();
            assert_eq!(s.hero_position, Position::BTN);
            assert_eq!(s.villain_info.as_ref().map(|v| v.position), Some(Position::BB));
            assert_eq!(s.next_to_act, Position::BB);
        }
    }
}

#[test]
fn chips_in_equal_chips_out() {
    let mut g = generator(8);
    let s = g.generate_river().unwrap();
    let total: f64 = s.stacks.values().sum::<f64>() + s.pot;
    assert_eq!(total, g.config().starting_stack * g.config().num_players as f64);
}

#[test]
fn later_streets_tag_their_actions() {
    let s = generator(9).generate_river().unwrap();
    let streets: Vec<Option<Street>> = s.action_history.iter().map(|e| e.street).collect();
    assert!(streets[..8].iter().all(Option::is_none));
    assert_eq!(&streets[8..11], &[Some(Street::Flop); 3]);
    assert_eq!(&streets[11..], &[Some(Street::Turn); 3]);
}

// ── independence ─────────────────────────────────────────────────────────────

#[test]
fn repeated_river_generation_is_independent() {
    let mut g = generator(31);
    let a = g.generate_river().unwrap();
    let snapshot = a.clone();
    let b = g.generate_river().unwrap();
    assert_consistent(&a);
    assert_consistent(&b);
    assert_eq!(a, snapshot, "generating again must not touch an earlier state");
    assert_ne!(a.known_cards(), b.known_cards());
}

#[test]
fn advance_never_reuses_visible_cards() {
    let mut g = generator(32);
    for _ in 0..50 {
        let flop = g.generate_flop().unwrap();
        let turn = g.advance(&flop).unwrap();
        let river = g.advance(&turn).unwrap();
        assert_consistent(&turn);
        assert_consistent(&river);
        assert_eq!(flop.scenario_type, Street::Flop);
    }
}

// ── wire format ──────────────────────────────────────────────────────────────

#[test]
fn scenario_serializes_with_camel_case_fields() {
    let s = generator(41).generate_flop().unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["scenarioType"], "flop");
    assert_eq!(json["heroPosition"], "BTN");
    assert_eq!(json["villainInfo"]["position"], "BB");
    assert_eq!(json["heroHoleCards"][0], s.hero_hole_cards[0].to_string());
    assert_eq!(json["stacks"]["BTN"], 97.0);
    assert_eq!(json["actionHistory"][0], serde_json::json!({ "player": "SB", "action": "posts_sb", "amount": 0.5 }));
    assert_eq!(json["nextToAct"], "BB");

    let back: ScenarioState = serde_json::from_value(json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn preflop_scenario_omits_villain() {
    let s = generator(43).generate_preflop().unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert!(json.get("villainInfo").is_none());
    assert_eq!(json["communityCards"], serde_json::json!([]));
}

// ── advisor ──────────────────────────────────────────────────────────────────

#[test]
fn builtin_chart_raises_aces_on_the_button() {
    let mut s = generator(51).generate_preflop().unwrap();
    s.hero_position = Position::BTN;
    s.hero_hole_cards = ["Ah".parse().unwrap(), "Ad".parse().unwrap()];
    let response = advisor().advise(&s);
    let details = response.details().unwrap();
    assert_eq!(details.strategy, Strategy::RfiChart);
    assert_eq!(details.chart_entry, Some(ChartEntry::pure(ChartAction::Raise)));
    assert_eq!(response.advice(), Some("GTO recommends: raise (100%)"));
}

#[test]
fn configured_profile_selects_the_chart() {
    let config = AdvisorConfig { chart_profile: "RFI_40BB_6MAX".into(), ..AdvisorConfig::default() };
    let a = GtoAdvisor::from_config(&config);
    assert_eq!(a.profile(), "RFI_40BB_6MAX");
    assert!(a.charts().profile_names().all(|name| name != a.profile()));

    let mut s = generator(50).generate_preflop().unwrap();
    s.hero_position = Position::CO;
    assert!(a.advise(&s).is_error());
    assert_eq!(advisor().profile(), "RFI_100BB_6MAX");
}

#[test]
fn builtin_chart_folds_trash_from_utg() {
    let mut s = generator(52).generate_preflop().unwrap();
    s.hero_position = Position::UTG;
    s.hero_hole_cards = ["7c".parse().unwrap(), "2d".parse().unwrap()];
    s.action_history.truncate(2);
    let details = advisor().advise(&s).details().cloned().unwrap();
    assert_eq!(details.strategy, Strategy::DefaultFoldRfi);
    assert_eq!(details.chart_entry.map(|e| (e.action, e.frequency)), Some((ChartAction::Fold, 1.0)));
}

#[test]
fn every_generated_scenario_gets_a_well_formed_response() {
    let a = advisor();
    let mut g = generator(53);
    for street in STREETS {
        for _ in 0..25 {
            let s = g.generate(street).unwrap();
            let response = a.advise(&s);
            assert_ne!(response.advice().is_some(), response.error().is_some());
            if street == Street::Preflop && s.hero_position != Position::BB {
                assert!(!response.is_error(), "{:?} {:?}", s.hero_position, response);
            }
        }
    }
}

#[test]
fn big_blind_has_no_open_raising_chart() {
    let mut s = generator(54).generate_preflop().unwrap();
    s.hero_position = Position::BB;
    let response = advisor().advise(&s);
    assert_eq!(response.error(), Some("no RFI chart for position: BB"));
}

#[test]
fn advice_never_mutates_the_scenario() {
    let s = generator(55).generate_flop().unwrap();
    let before = s.clone();
    let _ = advisor().advise(&s);
    assert_eq!(s, before);
}

#[test]
fn review_echoes_the_submitted_action() {
    let s = generator(56).generate_turn().unwrap();
    let review = advisor().review(&s, ActionKind::Bet, Some(7.0));
    assert_eq!(review.your_action, ActionKind::Bet);
    assert_eq!(review.your_amount, Some(7.0));
    assert_eq!(review.gto_advice.details().unwrap().strategy, Strategy::GeneralHeuristicTurn);

    let json = serde_json::to_value(&review).unwrap();
    assert_eq!(json["yourAction"], "bet");
    assert!(json["gtoAdvice"]["advice"].is_string());
    assert!(json["gtoAdvice"].get("error").is_none());
}

#[test]
fn error_response_serializes_without_advice() {
    let mut s = generator(57).generate_flop().unwrap();
    s.scenario_type = Street::Preflop;
    s.hero_position = Position::SB;
    s.action_history.push(ActionEvent::check(Position::BB));
    let response = advisor().flop_advice(&s);
    let json = serde_json::to_value(&response).unwrap();
    assert!(json["error"].is_string());
    assert!(json.get("advice").is_none());
    assert!(json.get("details").is_none());
}

#[test]
fn one_chart_book_serves_many_threads() {
    let a = GtoAdvisor::new(Arc::new(ChartBook::builtin()));
    let handles: Vec<_> = SEEDS
        .iter()
        .map(|&seed| {
            let a = a.clone();
            thread::spawn(move || {
                let mut g = generator(seed);
                (0..20).all(|_| !a.advise(&g.generate_flop().unwrap()).is_error())
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
    assert_eq!(Arc::strong_count(a.charts()), 1);
}
