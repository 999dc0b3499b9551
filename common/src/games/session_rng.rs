use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for placement decisions. Tests substitute scripted sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn random_range_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index in `0..len`. `len` must be positive.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_range_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.rng.random_range(low..=high)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
