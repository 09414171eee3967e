//! Injected randomness
//!
//! Every randomized attribute in the engine is drawn through [`RandomSource`]
//! so a host can pass a real generator and a test can pass a scripted one.

use rand::Rng;

/// Source of uniformly distributed values
pub trait RandomSource {
    /// Next value in `[0.0, 1.0)`
    fn next_unit(&mut self) -> f32;

    /// Value in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_unit()
    }

    /// Integer in `[min, max]` (both inclusive)
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        let offset = (self.next_unit() * span as f32) as usize;
        min + offset.min(span - 1)
    }
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of unit values, cycling when it runs out
///
/// Values are clamped into `[0.0, 1.0)` so a script can never push an
/// attribute outside its configured range.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
