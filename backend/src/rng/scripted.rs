//! Scripted noise for tests
//!
//! Feeds a predetermined sequence of draws to the transition engine so a
//! test can force or suppress individual stochastic branches. Shipped in
//! the library (not behind `cfg(test)`) so integration tests can use it.

use super::NoiseSource;

/// Replays a fixed sequence of draws.
///
/// A scripted sequence panics once it is exhausted, so a test that consumes
/// more draws than it planned for fails loudly instead of drifting.
///
/// # Example
/// ```
/// use platform_simulator_core_rs::{NoiseSource, ScriptedNoise};
///
/// let mut noise = ScriptedNoise::new(vec![0.25, 0.75]);
/// assert_eq!(noise.draw(), 0.25);
/// assert_eq!(noise.draw(), 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedNoise {
    draws: Vec<f64>,
    cursor: usize,
    repeat_last: bool,
}

impl ScriptedNoise {
    /// Replay `draws` in order, panicking once they run out.
    pub fn new(draws: Vec<f64>) -> Self {
        Self {
            draws,
            cursor: 0,
            repeat_last: false,
        }
    }

    /// Return `value` on every draw, forever.
    pub fn constant(value: f64) -> Self {
        Self {
            draws: vec![value],
            cursor: 0,
            repeat_last: true,
        }
    }
}

impl NoiseSource for ScriptedNoise {
    fn draw(&mut self) -> f64 {
        if self.cursor >= self.draws.len() {
            if self.repeat_last {
                // constant() guarantees at least one element
                return self.draws[self.draws.len() - 1];
            }
            panic!("scripted noise exhausted after {} draws", self.cursor);
        }
        let value = self.draws[self.cursor];
        self.cursor += 1;
        value
    }
}
