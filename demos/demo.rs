//! Walk through one scenario per street and print the advice for it.
//!
//! Run with: `cargo run --example demo` (add `RUST_LOG=debug` for library logs)
//!
//! 1. **Preflop** — everyone folds to a random hero; the built-in chart book
//!    answers with a raise/fold frequency.
//! 2. **Flop → turn → river** — one BTN vs BB hand chained street by street
//!    with `advance`, each snapshot left untouched by the next.
//! 3. **Action review** — a submitted bet echoed back with the advice.

use poker_trainer::{
    training_engine::helpers::{board_str, hand_str},
    ActionKind, AdvisorConfig, GeneratorConfig, GtoAdvisor, ScenarioGenerator, ScenarioState,
};

fn print_scenario(s: &ScenarioState, advisor: &GtoAdvisor) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  Hero: {} on the {}  Pot: {}bb", s.scenario_type, hand_str(&s.hero_hole_cards), s.hero_position, s.pot);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if !s.community_cards.is_empty() {
        println!("  Board: {}", board_str(&s.community_cards));
    }
    for e in &s.action_history {
        let amount = e.amount.map(|a| format!(" {a}")).unwrap_or_default();
        println!("    {:<4} {}{}", e.player.label(), e.action, amount);
    }
    println!("  Next to act: {}", s.next_to_act);
    println!();
    let response = advisor.advise(s);
    match (response.advice(), response.error()) {
        (Some(advice), _) => println!("  {}", advice.replace('\n', "\n  ")),
        (_, Some(error))  => println!("  (no advice: {error})"),
        _                 => {}
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut generator = ScenarioGenerator::new(GeneratorConfig::seeded(2024))?;
    let advisor = GtoAdvisor::from_config(&AdvisorConfig::default());

    let profiles: Vec<&str> = advisor.charts().profile_names().collect();
    println!("Chart profile: {} (available: {})", advisor.profile(), profiles.join(", "));
    let config = generator.config();
    println!(
        "Table: {}-max, {}bb stacks, seed {:?}",
        config.num_players, config.starting_stack, config.rng_seed
    );
    println!();

    print_scenario(&generator.generate_preflop()?, &advisor);

    let flop = generator.generate_flop()?;
    let turn = generator.advance(&flop)?;
    let river = generator.advance(&turn)?;
    for s in [&flop, &turn, &river] {
        print_scenario(s, &advisor);
    }

    let review = advisor.review(&river, ActionKind::Bet, Some(20.0));
    println!("{}", serde_json::to_string_pretty(&review)?);
    Ok(())
}
