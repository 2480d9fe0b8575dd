//! Daily transition and player actions
//!
//! `TransitionEngine` owns the tuning rates and the noise stream, and
//! exposes the four operations a front end needs: advancing a day,
//! launching a campaign, moving a lever, and resetting.
//!
//! # Purity
//!
//! Operations never mutate the input state. Each returns a fresh state plus
//! the events the operation produced; the caller decides what to render and
//! keeps the returned state as the new truth. The only thing that advances
//! inside the engine is the noise stream.
//!
//! # Draw Order
//!
//! `advance_day` consumes draws in a fixed order:
//! 1. user growth noise (always)
//! 2. regulatory warning (only when the day's reputation is below the
//!    regulatory threshold)
//! 3. filter bubble scandal (always)
//!
//! Skipping the regulatory draw on healthy days is part of the engine's
//! contract; seeded replays depend on it.

use tracing::debug;

use crate::engine::rates::EconomyRates;
use crate::models::event::Event;
use crate::models::levers::{Lever, Levers};
use crate::models::state::{DaySnapshot, SimulationState};
use crate::rng::{NoiseSource, RngManager};

/// Applies player operations to immutable input states.
///
/// # Example
///
/// ```rust
/// use platform_simulator_core_rs::{Levers, TransitionEngine};
///
/// let mut engine = TransitionEngine::new(42);
/// let state = engine.reset();
/// let (next, events) = engine.advance_day(&state, &Levers::default());
///
/// assert_eq!(next.day(), state.day() + 1);
/// assert!(!events.is_empty());
/// ```
pub struct TransitionEngine {
    rates: EconomyRates,
    noise: Box<dyn NoiseSource>,
}

impl TransitionEngine {
    /// Create an engine with default rates and a seeded xorshift64* stream
    pub fn new(seed: u64) -> Self {
        Self::with_noise(EconomyRates::default(), Box::new(RngManager::new(seed)))
    }

    /// Create an engine with explicit rates and noise
    ///
    /// Tests use this with [`crate::ScriptedNoise`] to force or suppress
    /// individual stochastic branches.
    pub fn with_noise(rates: EconomyRates, noise: Box<dyn NoiseSource>) -> Self {
        Self { rates, noise }
    }

    /// The tuning rates this engine applies
    pub fn rates(&self) -> &EconomyRates {
        &self.rates
    }

    /// The fixed starting state of a fresh playthrough
    pub fn reset(&self) -> SimulationState {
        SimulationState::new()
    }

    /// Simulate one day under the given lever positions.
    ///
    /// Returns the next state and the day's events, incidents first and the
    /// day summary last. The same events are appended to the returned
    /// state's log, and the day's closing metrics to its history. The lever
    /// positions used for the day are recorded on the returned state.
    pub fn advance_day(
        &mut self,
        state: &SimulationState,
        levers: &Levers,
    ) -> (SimulationState, Vec<Event>) {
        let rates = &self.rates;
        let day = state.day;
        let starting_users = state.users;

        // Deterministic drift from the lever positions
        let mut engagement = state.engagement
            + levers.personalization * rates.engagement_gain_per_personalization
            - levers.moderation * rates.engagement_drag_per_moderation;
        let mut reputation = state.reputation
            + levers.moderation * rates.reputation_gain_per_moderation
            - levers.personalization * rates.reputation_drag_per_personalization
            - levers.ad_targeting * rates.reputation_drag_per_ad_targeting;
        if levers.moderation > rates.strict_moderation_threshold {
            reputation += rates.strict_moderation_bonus;
        }

        // Ad revenue reads the day's fresh engagement and reputation,
        // before any scandal can knock reputation down
        let mut revenue = state.revenue
            + engagement
                * levers.ad_targeting
                * reputation.max(rates.reputation_revenue_floor)
                * rates.revenue_per_engagement_point;

        // User growth, pulled by engagement and reputation, dampened by noise
        let growth_noise = self.noise.draw();
        let growth_rate = engagement * rates.user_growth_per_engagement
            + reputation * rates.user_growth_per_reputation
            - growth_noise * rates.user_growth_noise_weight;
        let mut users = starting_users + (growth_rate * starting_users as f64).floor() as i64;
        users = users.clamp(SimulationState::MIN_USERS, SimulationState::MAX_USERS);

        // Churn runs before the stochastic branches so a regulatory hit
        // stacks on the already reduced revenue
        if reputation < rates.reputation_warning_threshold {
            users = ((users as f64 - starting_users as f64 * rates.churn_rate).floor() as i64)
                .max(SimulationState::MIN_USERS);
            revenue *= rates.churn_revenue_factor;
        }

        let mut events = Vec::new();

        // Regulators only look at platforms whose reputation is already
        // low; healthy days consume no draw here
        if reputation < rates.regulatory_reputation_threshold
            && self.noise.draw() < rates.regulatory_warning_probability
        {
            revenue *= rates.regulatory_revenue_factor;
            events.push(Event::RegulatoryWarning { day });
        }

        // Scandal chance scales with personalization; the reputation loss
        // lands after the regulatory check read it
        if self.noise.draw() < levers.personalization * rates.scandal_probability_per_personalization
        {
            reputation = (reputation - rates.scandal_reputation_loss).max(0.0);
            events.push(Event::FilterBubbleScandal { day });
        }

        // Must stay last: compares against the final user count of the day
        if users < starting_users {
            events.push(Event::UsersLeaving { day });
        }

        engagement = engagement.max(0.0);
        reputation = reputation.max(0.0);
        revenue = revenue.max(0.0);

        events.push(Event::DaySummary {
            day,
            users,
            engagement,
            reputation,
            revenue,
        });

        debug!(day, users, engagement, reputation, revenue, "day simulated");

        let mut next = state.clone();
        next.users = users;
        next.engagement = engagement;
        next.reputation = reputation;
        next.revenue = revenue;
        next.levers = *levers;
        next.history.push(DaySnapshot {
            day,
            users,
            engagement,
            reputation,
            revenue,
        });
        next.day = day + 1;
        next.log.log_all(&events);

        (next, events)
    }

    /// Launch a public relations campaign.
    ///
    /// Reputation rises by a diminishing amount (each prior campaign weakens
    /// the next) up to the campaign cap, and the campaign costs a fixed
    /// fraction of revenue. Does not advance the day.
    pub fn run_campaign(&self, state: &SimulationState) -> (SimulationState, Vec<Event>) {
        let rates = &self.rates;

        let effect = (rates.campaign_base_effect
            - state.campaign_count as f64 * rates.campaign_effect_decay)
            .max(rates.campaign_min_effect);
        let reputation = (state.reputation + effect).min(rates.campaign_reputation_cap);
        let revenue = state.revenue * rates.campaign_revenue_factor;

        let events = vec![Event::CampaignLaunched {
            day: state.day,
            reputation_gain: effect,
            revenue_cut: 1.0 - rates.campaign_revenue_factor,
        }];

        debug!(day = state.day, effect, reputation, "campaign launched");

        let mut next = state.clone();
        next.reputation = reputation;
        next.revenue = revenue;
        next.campaign_count += 1;
        next.log.log_all(&events);

        (next, events)
    }

    /// Move a lever to a new position.
    ///
    /// Raising a lever charges a fraction of revenue proportional to the
    /// increase; lowering one is free. The position is stored either way.
    /// Does not advance the day. The caller is expected to clamp
    /// `new_value` to [`Lever::range`] first.
    pub fn adjust_lever(
        &self,
        state: &SimulationState,
        lever: Lever,
        new_value: f64,
    ) -> (SimulationState, Vec<Event>) {
        let increase = new_value - state.levers.get(lever);

        let mut next = state.clone();
        let mut events = Vec::new();

        if increase > 0.0 {
            let charge_rate = self.rates.upgrade_charge_per_unit * increase;
            next.revenue = state.revenue * (1.0 - charge_rate);
            events.push(Event::LeverRaised {
                day: state.day,
                lever,
                increase,
                charge_rate,
            });
        }
        next.levers.set(lever, new_value);
        next.log.log_all(&events);

        debug!(day = state.day, %lever, new_value, "lever adjusted");

        (next, events)
    }
}
