//! Event logging for session replay and the day-by-day feed.
//!
//! This module defines the Event enum which captures everything that happens
//! during a playthrough. Events enable:
//! - The scrolling feed shown after each simulated day
//! - The critical-events panel (scandals, warnings, player actions)
//! - Post-run analysis and export
//!
//! # Event Types
//!
//! Events fall into three groups:
//! - **Summary**: one `DaySummary` per simulated day
//! - **Incidents**: stochastic fallout (`RegulatoryWarning`, `FilterBubbleScandal`, `UsersLeaving`)
//! - **Actions**: things the player did (`CampaignLaunched`, `LeverRaised`)
//!
//! # Example
//!
//! ```rust
//! use platform_simulator_core_rs::models::Event;
//!
//! let event = Event::DaySummary {
//!     day: 1,
//!     users: 10,
//!     engagement: 1.02,
//!     reputation: 1.01,
//!     revenue: 10_103.02,
//! };
//!
//! assert_eq!(
//!     event.to_string(),
//!     "Day 1: Users=10, Engagement=1.02, Reputation=1.01, Revenue=$10,103"
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::levers::Lever;

/// Simulation event capturing one state change or incident.
///
/// All events include the day they occurred on. Events are logged in the
/// order they occur within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Metrics after a day finished simulating
    DaySummary {
        day: u32,
        users: i64,
        engagement: f64,
        reputation: f64,
        revenue: f64,
    },

    /// Regulators noticed a low-reputation platform
    RegulatoryWarning { day: u32 },

    /// Personalization gone wrong made the news
    FilterBubbleScandal { day: u32 },

    /// The user count dropped over the day
    UsersLeaving { day: u32 },

    /// Player launched a public relations campaign
    CampaignLaunched {
        day: u32,
        /// Reputation effect before the cap was applied
        reputation_gain: f64,
        /// Fraction of revenue spent on the campaign
        revenue_cut: f64,
    },

    /// Player raised a lever and paid the engineering charge
    LeverRaised {
        day: u32,
        lever: Lever,
        increase: f64,
        charge_rate: f64,
    },
}

impl Event {
    /// Get the day this event occurred on
    pub fn day(&self) -> u32 {
        match self {
            Event::DaySummary { day, .. } => *day,
            Event::RegulatoryWarning { day } => *day,
            Event::FilterBubbleScandal { day } => *day,
            Event::UsersLeaving { day } => *day,
            Event::CampaignLaunched { day, .. } => *day,
            Event::LeverRaised { day, .. } => *day,
        }
    }

    /// Get a short description of the event type
    pub fn kind(&self) -> &'static str {
        match self {
            Event::DaySummary { .. } => "DaySummary",
            Event::RegulatoryWarning { .. } => "RegulatoryWarning",
            Event::FilterBubbleScandal { .. } => "FilterBubbleScandal",
            Event::UsersLeaving { .. } => "UsersLeaving",
            Event::CampaignLaunched { .. } => "CampaignLaunched",
            Event::LeverRaised { .. } => "LeverRaised",
        }
    }

    /// Whether this event belongs in the critical-events panel
    ///
    /// Everything except the per-day summary counts as critical.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Event::DaySummary { .. })
    }
}

/// Group digits of the rounded value in threes, `toLocaleString` style.
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::DaySummary {
                day,
                users,
                engagement,
                reputation,
                revenue,
            } => write!(
                f,
                "Day {}: Users={}, Engagement={:.2}, Reputation={:.2}, Revenue=${}",
                day,
                users,
                engagement,
                reputation,
                format_thousands(*revenue)
            ),
            Event::RegulatoryWarning { day } => write!(
                f,
                "Critical Event on Day {}: Regulatory warning issued due to low reputation! Revenue hit.",
                day
            ),
            Event::FilterBubbleScandal { day } => write!(
                f,
                "Critical Event on Day {}: A filter bubble scandal caused a reputation loss!",
                day
            ),
            Event::UsersLeaving { day } => write!(
                f,
                "Critical Event on Day {}: Users are leaving the platform due to declining engagement or reputation!",
                day
            ),
            Event::CampaignLaunched {
                day,
                reputation_gain,
                revenue_cut,
            } => write!(
                f,
                "Critical Event on Day {}: Public Campaign launched. Reputation improved by {:.2}, Revenue decreased by {:.0}%.",
                day,
                reputation_gain,
                revenue_cut * 100.0
            ),
            Event::LeverRaised {
                day,
                lever,
                increase,
                charge_rate,
            } => {
                let subject = match lever {
                    Lever::Personalization => "Personalization Algorithm",
                    Lever::Moderation => "moderation efforts",
                    Lever::AdTargeting => "ad targeting Algorithm",
                };
                write!(
                    f,
                    "Critical Event on Day {}: Upgraded {} by {:.2}. Revenue decreased by {:.1}%.",
                    day,
                    subject,
                    increase,
                    charge_rate * 100.0
                )
            }
        }
    }
}

/// Event log for storing and querying a playthrough's events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Add a batch of events in order
    pub fn log_all(&mut self, events: &[Event]) {
        self.events.extend_from_slice(events);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific day
    pub fn events_on_day(&self, day: u32) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }

    /// Get the events shown in the critical-events panel
    pub fn critical_events(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_critical()).collect()
    }
}
