//! Platform Simulator Core - Rust Engine
//!
//! Single-player economic simulation of running a social media platform.
//! The player tunes three policy levers and advances one day at a time,
//! trading engagement-driven revenue against reputation risk.
//!
//! # Architecture
//!
//! - **models**: Domain types (SimulationState, Levers, Event)
//! - **engine**: Daily transition and player actions
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. Operations are pure: input states are never mutated
//! 2. All randomness is deterministic (seeded RNG behind `NoiseSource`)
//! 3. The user count stays inside a fixed band; other metrics never go negative
//!
//! # Example
//!
//! ```rust
//! use platform_simulator_core_rs::{Levers, TransitionEngine};
//!
//! let mut engine = TransitionEngine::new(42);
//! let mut state = engine.reset();
//!
//! for _ in 0..7 {
//!     let levers = *state.levers();
//!     let (next, events) = engine.advance_day(&state, &levers);
//!     for event in &events {
//!         println!("{}", event);
//!     }
//!     state = next;
//! }
//!
//! assert_eq!(state.day(), 8);
//! assert_eq!(state.history().len(), 8);
//! ```

// Module declarations
pub mod engine;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use engine::{EconomyRates, TransitionEngine};
pub use models::{
    event::{Event, EventLog},
    levers::{Lever, Levers, ParseLeverError},
    state::{DaySnapshot, SimulationState},
};
pub use rng::{NoiseSource, RngManager, ScriptedNoise};
