//! Integration tests for player actions
//!
//! Campaigns and lever moves apply between days: they must never advance
//! the day counter or touch the history, only the metrics and the log.

use platform_simulator_core_rs::{
    EconomyRates, Event, Lever, Levers, ScriptedNoise, TransitionEngine,
};

const EPS: f64 = 1e-9;

fn constant_engine(value: f64) -> TransitionEngine {
    TransitionEngine::with_noise(
        EconomyRates::default(),
        Box::new(ScriptedNoise::constant(value)),
    )
}

#[test]
fn test_first_campaign_full_effect() {
    let engine = TransitionEngine::new(1);
    let state = engine.reset();

    let (next, events) = engine.run_campaign(&state);

    assert!((next.reputation() - 1.2).abs() < EPS);
    assert!((next.revenue() - 9_000.0).abs() < EPS);
    assert_eq!(next.campaign_count(), 1);

    // The day does not move and no snapshot is taken
    assert_eq!(next.day(), 1);
    assert_eq!(next.history().len(), 1);

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].to_string(),
        "Critical Event on Day 1: Public Campaign launched. Reputation improved by 0.20, Revenue decreased by 10%."
    );
    assert_eq!(next.log().len(), 1);
}

#[test]
fn test_campaign_effect_diminishes_to_floor() {
    let engine = TransitionEngine::new(1);
    let mut state = engine.reset();

    let mut gains = Vec::new();
    for _ in 0..6 {
        let (next, events) = engine.run_campaign(&state);
        match events[0] {
            Event::CampaignLaunched {
                reputation_gain, ..
            } => gains.push(reputation_gain),
            _ => panic!("expected a campaign event"),
        }
        state = next;
    }

    let expected = [0.2, 0.15, 0.1, 0.05, 0.05, 0.05];
    for (got, want) in gains.iter().zip(expected) {
        assert!((got - want).abs() < EPS, "gain {} != {}", got, want);
    }
    assert_eq!(state.campaign_count(), 6);
}

#[test]
fn test_campaign_caps_reputation_from_both_sides() {
    let mut engine = constant_engine(1.0);
    let mut state = engine.reset();
    let strict = Levers {
        personalization: 0.0,
        moderation: 2.0,
        ad_targeting: 0.0,
    };

    // Strict moderation grows reputation past the campaign cap; the daily
    // transition itself has no ceiling
    for _ in 0..8 {
        let (next, _) = engine.advance_day(&state, &strict);
        state = next;
    }
    assert!(state.reputation() > 2.0);

    let (next, _) = engine.run_campaign(&state);

    // A campaign on an over-cap reputation pulls it back to the cap
    assert_eq!(next.reputation(), 2.0);
    assert!(next.reputation() < state.reputation());
}

#[test]
fn test_raising_a_lever_charges_revenue() {
    let engine = TransitionEngine::new(1);
    let state = engine.reset();

    let (next, events) = engine.adjust_lever(&state, Lever::Personalization, 3.0);

    // +2.0 at 5% per unit costs 10% of revenue
    assert!((next.revenue() - 9_000.0).abs() < EPS);
    assert_eq!(next.levers().personalization, 3.0);
    assert_eq!(next.day(), 1);
    assert_eq!(next.history().len(), 1);

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].to_string(),
        "Critical Event on Day 1: Upgraded Personalization Algorithm by 2.00. Revenue decreased by 10.0%."
    );
}

#[test]
fn test_lever_charge_texts_per_lever() {
    let engine = TransitionEngine::new(1);
    let state = engine.reset();

    let (_, events) = engine.adjust_lever(&state, Lever::Moderation, 2.0);
    assert_eq!(
        events[0].to_string(),
        "Critical Event on Day 1: Upgraded moderation efforts by 1.00. Revenue decreased by 5.0%."
    );

    let (_, events) = engine.adjust_lever(&state, Lever::AdTargeting, 2.0);
    assert_eq!(
        events[0].to_string(),
        "Critical Event on Day 1: Upgraded ad targeting Algorithm by 1.00. Revenue decreased by 5.0%."
    );
}

#[test]
fn test_lowering_or_holding_a_lever_is_free() {
    let engine = TransitionEngine::new(1);
    let state = engine.reset();

    let (next, events) = engine.adjust_lever(&state, Lever::Moderation, 0.2);
    assert!(events.is_empty());
    assert_eq!(next.revenue(), state.revenue());
    assert_eq!(next.levers().moderation, 0.2);

    let (next, events) = engine.adjust_lever(&state, Lever::AdTargeting, 1.0);
    assert!(events.is_empty());
    assert_eq!(next.revenue(), state.revenue());
    assert_eq!(next.levers().ad_targeting, 1.0);
}

#[test]
fn test_actions_flow_into_the_next_day() {
    let mut engine = constant_engine(1.0);
    let state = engine.reset();

    let (state, _) = engine.run_campaign(&state);
    let (state, _) = engine.adjust_lever(&state, Lever::Personalization, 0.0);

    assert!((state.reputation() - 1.2).abs() < EPS);
    assert!((state.revenue() - 9_000.0).abs() < EPS);

    let levers = *state.levers();
    let (next, _) = engine.advance_day(&state, &levers);

    // Personalization off: engagement only feels the moderation drag
    assert!((next.engagement() - 0.97).abs() < EPS);
    // Reputation builds on the campaign result
    assert!((next.reputation() - 1.23).abs() < EPS);
    // Ad revenue accrues on the already campaign-cut total
    assert!((next.revenue() - (9_000.0 + 0.97 * 1.0 * 1.23 * 100.0)).abs() < EPS);
    assert_eq!(next.day(), 2);
    assert_eq!(next.history().len(), 2);
}
