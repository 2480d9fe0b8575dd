//! Deterministic random number generation
//!
//! All randomness consumed by the transition engine flows through the
//! [`NoiseSource`] trait. Production code wires up the seeded xorshift64*
//! generator; tests script the exact sequence of draws instead.
//! CRITICAL: the engine must never sample randomness from anywhere else.

mod scripted;
mod xorshift;

pub use scripted::ScriptedNoise;
pub use xorshift::RngManager;

/// A stream of uniform random draws in `[0.0, 1.0)`.
pub trait NoiseSource {
    /// Return the next draw and advance the stream.
    fn draw(&mut self) -> f64;
}
