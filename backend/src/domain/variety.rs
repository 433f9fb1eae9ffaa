//! Injectable randomness for the intentionally varied feed selections.
//!
//! The video and social feeds deliberately rotate search phrases and sort
//! orders between calls. That variety is injected through this seam instead
//! of ambient RNG state so tests can pin the selection with a seed or a
//! fixed picker.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of bounded random choices.
pub trait Variety: Send + Sync {
    /// Pick an index in `0..len`. Returns 0 when `len` is 0 so callers stay
    /// total; they must not index with the result in that case.
    fn pick(&self, len: usize) -> usize;
}

/// Seedable [`Variety`] backed by a [`SmallRng`].
pub struct SeededVariety {
    rng: Mutex<SmallRng>,
}

impl SeededVariety {
    /// Seeded construction yields a reproducible pick sequence; `None`
    /// seeds from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Variety for SeededVariety {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0..len)
    }
}

/// Fixed [`Variety`] for tests: always picks the configured index,
/// clamped to the available range.
pub struct FixedVariety(pub usize);

impl Variety for FixedVariety {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0.min(len - 1)
        }
    }
}

/// Pick one element from a non-empty slice.
pub fn pick_from<'a, T>(variety: &dyn Variety, choices: &'a [T]) -> Option<&'a T> {
    choices.get(variety.pick(choices.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_variety_is_reproducible() {
        let a = SeededVariety::new(Some(42));
        let b = SeededVariety::new(Some(42));
        let picks_a: Vec<usize> = (0..16).map(|_| a.pick(6)).collect();
        let picks_b: Vec<usize> = (0..16).map(|_| b.pick(6)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 6));
    }

    #[test]
    fn fixed_variety_clamps_to_range() {
        let variety = FixedVariety(10);
        assert_eq!(variety.pick(3), 2);
        assert_eq!(variety.pick(0), 0);
    }

    #[test]
    fn pick_from_returns_none_for_empty_slices() {
        let variety = FixedVariety(0);
        assert_eq!(pick_from::<u8>(&variety, &[]), None);
        assert_eq!(pick_from(&variety, &["only"]), Some(&"only"));
    }
}
