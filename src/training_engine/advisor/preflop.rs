use crate::training_engine::{
    advisor::{
        chart::{ChartAction, ChartEntry, PositionChart},
        expect_street,
        hand::HandCode,
        ranges::matching_ranges,
        Advice, AdviceDetails, AdviceResponse, GtoAdvisor, Strategy,
    },
    error::{Result, TrainerError},
    models::{ScenarioState, Street},
};

/// A chart entry and the key it was found under.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHit<'a> {
    pub key: String,
    pub entry: &'a ChartEntry,
}

/// True when nobody but the blinds has put chips in before hero.
pub fn is_raise_first_in(state: &ScenarioState) -> bool {
    !state
        .action_history
        .iter()
        .filter(|e| !e.action.is_blind_post())
        .any(|e| e.action.is_monetary())
}

/// Direct lookup of `hand`, then the generic ranges in declared order.
pub fn resolve_entry(chart: &PositionChart, hand: HandCode) -> Option<ChartHit<'_>> {
    let code = hand.to_string();
    if let Some(entry) = chart.get(&code) {
        return Some(ChartHit { key: code, entry });
    }
    matching_ranges(hand).find_map(|key| {
        chart.get(key).map(|entry| {
            log::debug!("{} resolved through generic range {}", code, key);
            ChartHit { key: key.to_string(), entry }
        })
    })
}

impl GtoAdvisor {
    pub fn preflop_advice(&self, state: &ScenarioState) -> AdviceResponse {
        expect_street(state, Street::Preflop).and_then(|()| self.preflop(state)).into()
    }

    fn preflop(&self, state: &ScenarioState) -> Result<Advice> {
        if !is_raise_first_in(state) {
            return Ok(Advice {
                text: "Chart not available (not a clear RFI spot).".to_string(),
                details: AdviceDetails::new(Strategy::UnknownPreflopSituation),
            });
        }

        let position = state.hero_position;
        let chart = self
            .charts
            .position_chart(&self.profile, position)
            .ok_or(TrainerError::NoChartForPosition(position))?;

        let hand = HandCode::from_cards(&state.hero_hole_cards);
        let mut details = AdviceDetails::new(Strategy::RfiChart);
        details.hand = Some(hand.to_string());

        match resolve_entry(chart, hand) {
            Some(hit) => {
                details.chart_key = Some(hit.key);
                details.chart_entry = Some(hit.entry.clone());
                Ok(Advice { text: format!("GTO recommends: {}", hit.entry.describe()), details })
            }
            None => {
                log::debug!("{} not in RFI chart for {}, folding", hand, position);
                details.strategy = Strategy::DefaultFoldRfi;
                details.chart_entry = Some(ChartEntry::pure(ChartAction::Fold));
                Ok(Advice {
                    text: format!("GTO recommends: fold (hand {} not in RFI chart for {})", hand, position),
                    details,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::training_engine::{
        advisor::chart::ChartBook,
        helpers::{blind_posts, pot_of, stacks_after},
        models::{ActionEvent, ActionKind, Position},
    };

    const CHART: &str = r#"{
        "RFI_100BB_6MAX": {
            "BTN": {
                "AA":  { "action": "raise", "frequency": 1.0 },
                "A5o": { "action": "raise", "frequency": 0.7, "alternative": "fold", "alt_frequency": 0.3 },
                "Axs": { "action": "raise", "frequency": 1.0 },
                "T8s+": { "action": "raise", "frequency": 0.9, "alternative": "fold", "alt_frequency": 0.1 }
            },
            "UTG": {
                "KK": { "action": "raise", "frequency": 1.0 }
            }
        }
    }"#;

    fn advisor() -> GtoAdvisor {
        GtoAdvisor::new(Arc::new(ChartBook::from_json_str(CHART).unwrap()))
    }

    fn spot(hero: Position, cards: [&str; 2]) -> ScenarioState {
        let mut history = blind_posts();
        history.extend(
            Position::ALL.iter().take_while(|&&p| p != hero).filter(|p| !p.is_blind()).map(|&p| ActionEvent::fold(p)),
        );
        ScenarioState {
            scenario_type: Street::Preflop,
            num_players: 6,
            hero_position: hero,
            hero_hole_cards: [cards[0].parse().unwrap(), cards[1].parse().unwrap()],
            villain_info: None,
            stacks: stacks_after(100.0, &history),
            community_cards: vec![],
            pot: pot_of(&history),
            action_history: history,
            next_to_act: hero,
        }
    }

    #[test]
    fn direct_hit_reports_frequency() {
        let response = advisor().preflop_advice(&spot(Position::BTN, ["Ah", "As"]));
        assert_eq!(response.advice(), Some("GTO recommends: raise (100%)"));
        let details = response.details().unwrap();
        assert_eq!(details.strategy, Strategy::RfiChart);
        assert_eq!(details.chart_entry, Some(ChartEntry::pure(ChartAction::Raise)));
        assert_eq!(details.hand.as_deref(), Some("AA"));
    }

    #[test]
    fn alternative_is_appended() {
        let response = advisor().preflop_advice(&spot(Position::BTN, ["5c", "Ad"]));
        assert_eq!(response.advice(), Some("GTO recommends: raise (70%) or fold (30%)"));
    }

    #[test]
    fn generic_ranges_catch_missing_hands() {
        let response = advisor().preflop_advice(&spot(Position::BTN, ["Ah", "3h"]));
        assert_eq!(response.details().unwrap().chart_key.as_deref(), Some("Axs"));

        let response = advisor().preflop_advice(&spot(Position::BTN, ["Td", "9d"]));
        assert_eq!(response.details().unwrap().chart_key.as_deref(), Some("T8s+"));
        assert_eq!(response.advice(), Some("GTO recommends: raise (90%) or fold (10%)"));
    }

    #[test]
    fn unmatched_hand_defaults_to_fold() {
        let response = advisor().preflop_advice(&spot(Position::BTN, ["7c", "2d"]));
        assert_eq!(response.advice(), Some("GTO recommends: fold (hand 72o not in RFI chart for BTN)"));
        let details = response.details().unwrap();
        assert_eq!(details.strategy, Strategy::DefaultFoldRfi);
        assert_eq!(details.chart_entry, Some(ChartEntry::pure(ChartAction::Fold)));

        // Kxs is a generic range, but this chart has no such key.
        let response = advisor().preflop_advice(&spot(Position::BTN, ["Kh", "4h"]));
        assert_eq!(response.details().unwrap().strategy, Strategy::DefaultFoldRfi);
    }

    #[test]
    fn non_rfi_history_gets_no_chart() {
        let mut state = spot(Position::BTN, ["Ah", "As"]);
        state.action_history.push(ActionEvent::wager(Position::CO, ActionKind::Call, 1.0));
        assert!(!is_raise_first_in(&state));
        let response = advisor().preflop_advice(&state);
        let details = response.details().unwrap();
        assert_eq!(details.strategy, Strategy::UnknownPreflopSituation);
        assert!(details.chart_entry.is_none());
    }

    #[test]
    fn missing_position_is_an_error() {
        let response = advisor().preflop_advice(&spot(Position::CO, ["Ah", "As"]));
        assert_eq!(response.error(), Some("no RFI chart for position: CO"));
        assert!(response.advice().is_none());
    }

    #[test]
    fn empty_book_misses_every_position() {
        let advisor = GtoAdvisor::new(Arc::new(ChartBook::empty()));
        assert!(advisor.preflop_advice(&spot(Position::UTG, ["Kh", "Ks"])).is_error());
    }

    #[test]
    fn wrong_street_is_rejected() {
        let mut state = spot(Position::UTG, ["Kh", "Ks"]);
        state.scenario_type = Street::Flop;
        let response = advisor().preflop_advice(&state);
        assert!(response.error().unwrap().contains("expected a preflop scenario"));
    }
}
