//! Transition engine
//!
//! Owns the economy rates and the noise stream, and applies the player's
//! operations as pure state transitions.

pub mod rates;
pub mod transition;

pub use rates::EconomyRates;
pub use transition::TransitionEngine;
