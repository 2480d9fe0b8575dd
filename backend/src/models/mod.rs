//! Domain models for the platform simulator

pub mod event;
pub mod levers;
pub mod state;

// Re-exports
pub use event::{Event, EventLog};
pub use levers::{Lever, Levers, ParseLeverError};
pub use state::{DaySnapshot, SimulationState};
