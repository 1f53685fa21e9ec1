//! Deterministic source replaying a fixed script of fractions.
//!
//! Each call consumes the next fraction of the script, cycling back to the
//! start when exhausted. Integer and range draws are derived from the same
//! fraction, so a test can state every draw of a run as one list.

use super::RandomSource;

/// Random source that replays a fixed list of unit fractions.
///
/// Fractions are expected in `[0, 1)`. An empty script behaves as a
/// constant `0.0`.
///
/// # Examples
///
/// ```rust
/// use market_core::rng::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![0.5]);
/// assert_eq!(source.next_in_range(2.0, 4.0), 3.0);
/// assert_eq!(source.next_index(3), 1);
/// assert_eq!(source.draws(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `script`.
    pub fn new(script: Vec<f64>) -> Self {
        Self {
            script,
            cursor: 0,
            draws: 0,
        }
    }

    /// Returns how many draws have been consumed so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }

    fn advance(&mut self) -> f64 {
        self.draws += 1;
        if self.script.is_empty() {
            return 0.0;
        }
        let value = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        value
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.advance()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        let fraction = self.advance();
        ((fraction * upper as f64) as usize).min(upper.saturating_sub(1))
    }

    fn next_in_range(&mut self, min: f64, max: f64) -> f64 {
        let fraction = self.advance();
        min + fraction * (max - min)
    }
}
