//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use random_helpers_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_i32_range` and `false` for
/// `next_bool`. Suitable for tests that do not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_i32_range(&mut self, min: i32, _max: i32) -> i32 {
        min
    }

    fn next_bool(&mut self) -> bool {
        false
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. `next_bool` consumes the next value and treats any
/// non-zero value as `true`.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }

    fn next_value(&mut self) -> i32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

impl DeterministicRng for SequenceRng {
    fn next_i32_range(&mut self, _min: i32, _max: i32) -> i32 {
        self.next_value()
    }

    fn next_bool(&mut self) -> bool {
        self.next_value() != 0
    }
}
