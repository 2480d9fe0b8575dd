//! Simulation state
//!
//! Represents the complete state of one platform playthrough: the current
//! metrics, the lever positions, the day counter, and the accumulated
//! history and event log.
//!
//! # Critical Invariants
//!
//! 1. **User band**: `users` stays within `[MIN_USERS, MAX_USERS]`
//! 2. **Non-negative metrics**: engagement, reputation and revenue never drop below zero
//! 3. **History alignment**: one snapshot per simulated day, plus the day-0 baseline
//! 4. **Log ordering**: events appear in the order they were emitted

use serde::{Deserialize, Serialize};

use crate::models::event::EventLog;
use crate::models::levers::Levers;

const INITIAL_USERS: i64 = 10;
const INITIAL_ENGAGEMENT: f64 = 1.0;
const INITIAL_REPUTATION: f64 = 1.0;
const INITIAL_REVENUE: f64 = 10_000.0;

/// One day's metrics, kept for charting and export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub day: u32,
    pub users: i64,
    pub engagement: f64,
    pub reputation: f64,
    pub revenue: f64,
}

/// Complete state of a platform playthrough
///
/// Only the transition engine mutates this; callers read it through the
/// accessors and treat returned states as the new truth.
///
/// # Example
///
/// ```rust
/// use platform_simulator_core_rs::SimulationState;
///
/// let state = SimulationState::new();
/// assert_eq!(state.day(), 1);
/// assert_eq!(state.users(), 10);
/// assert_eq!(state.history().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Day about to be simulated (starts at 1)
    pub(crate) day: u32,

    /// Active user count, in thousands
    pub(crate) users: i64,

    /// How compulsively people scroll
    pub(crate) engagement: f64,

    /// Public standing of the platform
    pub(crate) reputation: f64,

    /// Cumulative revenue in dollars
    pub(crate) revenue: f64,

    /// Campaigns launched so far; each one is less effective than the last
    pub(crate) campaign_count: u32,

    /// Current lever positions
    pub(crate) levers: Levers,

    /// Metrics per simulated day, seeded with the day-0 baseline
    pub(crate) history: Vec<DaySnapshot>,

    /// Everything that happened, in order
    pub(crate) log: EventLog,
}

impl SimulationState {
    /// Smallest user count the simulation allows
    pub const MIN_USERS: i64 = 5;

    /// Largest user count the simulation allows
    pub const MAX_USERS: i64 = 15;

    /// Create the fixed starting state of a fresh playthrough
    pub fn new() -> Self {
        Self {
            day: 1,
            users: INITIAL_USERS,
            engagement: INITIAL_ENGAGEMENT,
            reputation: INITIAL_REPUTATION,
            revenue: INITIAL_REVENUE,
            campaign_count: 0,
            levers: Levers::default(),
            history: vec![DaySnapshot {
                day: 0,
                users: INITIAL_USERS,
                engagement: INITIAL_ENGAGEMENT,
                reputation: INITIAL_REPUTATION,
                revenue: INITIAL_REVENUE,
            }],
            log: EventLog::new(),
        }
    }

    /// Day about to be simulated
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Current user count
    pub fn users(&self) -> i64 {
        self.users
    }

    /// Current engagement level
    pub fn engagement(&self) -> f64 {
        self.engagement
    }

    /// Current reputation level
    pub fn reputation(&self) -> f64 {
        self.reputation
    }

    /// Cumulative revenue
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Number of public campaigns launched so far
    pub fn campaign_count(&self) -> u32 {
        self.campaign_count
    }

    /// Current lever positions
    pub fn levers(&self) -> &Levers {
        &self.levers
    }

    /// Per-day metric history, day 0 included
    pub fn history(&self) -> &[DaySnapshot] {
        &self.history
    }

    /// Everything that happened so far
    pub fn log(&self) -> &EventLog {
        &self.log
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}
