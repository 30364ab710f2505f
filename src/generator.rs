use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::base::{Base, GeneSequence, BASES};

/// Random sequence source. The generator owns its RNG so callers decide
/// whether a run is reproducible.
pub struct SequenceGenerator<R: Rng> {
    rng: R,
}

impl SequenceGenerator<StdRng> {
    /// Reproducible generator for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SequenceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw one of C, T, G, A uniformly.
    pub fn random_base(&mut self) -> Base {
        BASES[self.rng.gen_range(0..BASES.len())]
    }

    /// Build a sequence of exactly `len` random bases.
    pub fn random_sequence(&mut self, len: usize) -> GeneSequence {
        let mut bases = Vec::with_capacity(len);
        for _ in 0..len {
            bases.push(self.random_base());
        }
        GeneSequence::new(bases)
    }
}
