//! Random input arrays

use crate::step::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Smallest and largest generated value; bars never drop to zero height
pub const VALUE_RANGE: RangeInclusive<Value> = 5..=104;

/// Source of fresh unsorted arrays for the player
pub trait ArrayGenerator {
    fn generate(&mut self, len: usize) -> Vec<Value>;
}

/// Uniform random integers in [`VALUE_RANGE`]
#[derive(Debug, Clone)]
pub struct RandomArray {
    rng: StdRng,
}

impl RandomArray {
    pub fn new() -> Self {
        RandomArray {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of arrays for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomArray {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomArray {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayGenerator for RandomArray {
    fn generate(&mut self, len: usize) -> Vec<Value> {
        (0..len).map(|_| self.rng.gen_range(VALUE_RANGE)).collect()
    }
}

/// Hands out clones of one fixed array, for tests and scripted runs
#[derive(Debug, Clone)]
pub struct FixedArray(pub Vec<Value>);

impl ArrayGenerator for FixedArray {
    fn generate(&mut self, _len: usize) -> Vec<Value> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range() {
        let mut generator = RandomArray::seeded(7);
        let array = generator.generate(100);
        assert_eq!(array.len(), 100);
        assert!(array.iter().all(|v| VALUE_RANGE.contains(v)));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = RandomArray::seeded(42).generate(30);
        let b = RandomArray::seeded(42).generate(30);
        assert_eq!(a, b);
    }
}
