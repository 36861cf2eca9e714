use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the bytes consumed by CXNN.
pub trait RandomSource {
    fn random_byte(&mut self) -> u8;
}

/// Draws from the thread-local generator; not reproducible between runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_byte(&mut self) -> u8 {
        rand::thread_rng().gen()
    }
}

/// A seeded generator, so a ROM run can be replayed exactly.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}

/// Always yields the same byte
#[cfg(test)]
pub(crate) struct FixedRandom(pub u8);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn random_byte(&mut self) -> u8 {
        self.0
    }
}
