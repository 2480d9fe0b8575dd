//! Policy levers
//!
//! The three dials the player moves between days: personalization strength,
//! moderation strictness, and ad targeting aggressiveness. Lever positions
//! feed every term of the daily transition, and raising one costs a one-off
//! engineering charge against revenue.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a lever name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lever '{0}' (expected personalization, moderation or ad-targeting)")]
pub struct ParseLeverError(pub String);

/// Identifies one of the three policy levers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lever {
    Personalization,
    Moderation,
    AdTargeting,
}

impl Lever {
    /// All levers, in display order
    pub const ALL: [Lever; 3] = [Lever::Personalization, Lever::Moderation, Lever::AdTargeting];

    /// Human-readable label for UI output
    pub fn label(&self) -> &'static str {
        match self {
            Lever::Personalization => "Personalization Strength",
            Lever::Moderation => "Moderation Strictness",
            Lever::AdTargeting => "Ad Targeting Aggressiveness",
        }
    }

    /// Position range the caller is expected to clamp inputs to
    ///
    /// The engine itself accepts any finite value; clamping is a front-end
    /// concern so alternative UIs can widen the dials.
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Lever::Personalization => 0.0..=5.0,
            Lever::Moderation => 0.0..=2.0,
            Lever::AdTargeting => 0.0..=2.0,
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lever::Personalization => "personalization",
            Lever::Moderation => "moderation",
            Lever::AdTargeting => "ad-targeting",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Lever {
    type Err = ParseLeverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "personalization" | "p" => Ok(Lever::Personalization),
            "moderation" | "m" => Ok(Lever::Moderation),
            "ad-targeting" | "ad_targeting" | "adtargeting" | "a" => Ok(Lever::AdTargeting),
            other => Err(ParseLeverError(other.to_string())),
        }
    }
}

/// Current positions of all three levers
///
/// Fresh playthroughs start with every lever at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Levers {
    pub personalization: f64,
    pub moderation: f64,
    pub ad_targeting: f64,
}

impl Levers {
    /// Get the position of a single lever
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::Personalization => self.personalization,
            Lever::Moderation => self.moderation,
            Lever::AdTargeting => self.ad_targeting,
        }
    }

    /// Set the position of a single lever
    pub fn set(&mut self, lever: Lever, value: f64) {
        match lever {
            Lever::Personalization => self.personalization = value,
            Lever::Moderation => self.moderation = value,
            Lever::AdTargeting => self.ad_targeting = value,
        }
    }
}

impl Default for Levers {
    fn default() -> Self {
        Self {
            personalization: 1.0,
            moderation: 1.0,
            ad_targeting: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lever_names() {
        assert_eq!("personalization".parse(), Ok(Lever::Personalization));
        assert_eq!("Moderation".parse(), Ok(Lever::Moderation));
        assert_eq!("ad-targeting".parse(), Ok(Lever::AdTargeting));
        assert_eq!("ad_targeting".parse(), Ok(Lever::AdTargeting));
    }

    #[test]
    fn test_parse_lever_rejects_unknown() {
        let err = "engagement".parse::<Lever>().unwrap_err();
        assert_eq!(err, ParseLeverError("engagement".to_string()));
    }

    #[test]
    fn test_default_positions() {
        let levers = Levers::default();
        for lever in Lever::ALL {
            assert_eq!(levers.get(lever), 1.0);
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut levers = Levers::default();
        levers.set(Lever::Personalization, 3.5);
        levers.set(Lever::AdTargeting, 0.2);

        assert_eq!(levers.get(Lever::Personalization), 3.5);
        assert_eq!(levers.get(Lever::Moderation), 1.0);
        assert_eq!(levers.get(Lever::AdTargeting), 0.2);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(Lever::Personalization.range(), 0.0..=5.0);
        assert_eq!(Lever::Moderation.range(), 0.0..=2.0);
        assert_eq!(Lever::AdTargeting.range(), 0.0..=2.0);
    }
}
