//! Seeded random source for tile variant selection.
//!
//! The board picks one tile image per cell at construction time. Taking the
//! RNG as an explicit argument keeps map generation reproducible: the same
//! seed always produces the same map.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    ///
    /// Scales the full 32-bit output instead of taking `% max`: the low bits
    /// of a power-of-two LCG cycle with a very short period.
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to replay from here).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range_and_hits_every_value() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [0u32; 5];
        for _ in 0..1000 {
            let v = rng.next_below(5);
            assert!(v < 5);
            seen[v as usize] += 1;
        }
        // 1000 draws over 5 buckets: every bucket should be well populated.
        for count in seen {
            assert!(count > 100, "skewed distribution: {:?}", seen);
        }
    }

    #[test]
    fn test_next_below_zero_and_one() {
        let mut rng = SimpleRng::new(99);
        assert_eq!(rng.next_below(0), 0);
        for _ in 0..10 {
            assert_eq!(rng.next_below(1), 0);
        }
    }

    #[test]
    fn test_state_replays_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut replay = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), replay.next_u32());
    }
}
