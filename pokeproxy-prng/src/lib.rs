pub mod rand_util;

use rand::Rng;

/// A pseudo-random number generator that can be deterministically replayed from its seed.
///
/// A single generator drives every random decision of a battle simulation, so two simulations
/// started from the same seed with the same inputs make exactly the same decisions.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Returns the initial seed the generator was created with.
    fn initial_seed(&self) -> u64;

    /// Returns the next integer in the sequence.
    ///
    /// Values are always within the range of a [`u32`].
    fn next(&mut self) -> u64;
}

/// A real implementation of [`PseudoRandomNumberGenerator`].
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    seed: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Creates a new random number generator.
    ///
    /// If no seed is given, one is drawn from the thread-local generator.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(Self::generate_seed);
        Self {
            initial_seed: seed,
            seed,
        }
    }

    fn generate_seed() -> u64 {
        rand::rng().random()
    }

    /// Linear Congruential Generator (LCRNG).
    fn next_seed(seed: u64) -> u64 {
        const A: u64 = 0x5D588B656C078965;
        const C: u64 = 0x0000000000269EC3;
        seed.wrapping_mul(A).wrapping_add(C)
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.seed = Self::next_seed(self.seed);
        // The lower bits of an LCRNG have short periods.
        self.seed >> 32
    }
}

#[cfg(test)]
mod prng_test {
    use pretty_assertions::assert_eq;

    use crate::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
    };

    #[test]
    fn stores_initial_seed() {
        assert_eq!(
            RealPseudoRandomNumberGenerator::new(Some(12345)).initial_seed(),
            12345
        );
        assert_eq!(
            RealPseudoRandomNumberGenerator::new(Some(0)).initial_seed(),
            0
        );
    }

    #[test]
    fn replays_sequence_from_same_seed() {
        let mut a = RealPseudoRandomNumberGenerator::new(Some(42));
        let mut b = RealPseudoRandomNumberGenerator::new(Some(42));
        let a = (0..64).map(|_| a.next()).collect::<Vec<_>>();
        let b = (0..64).map(|_| b.next()).collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = RealPseudoRandomNumberGenerator::new(Some(1));
        let mut b = RealPseudoRandomNumberGenerator::new(Some(2));
        let a = (0..8).map(|_| a.next()).collect::<Vec<_>>();
        let b = (0..8).map(|_| b.next()).collect::<Vec<_>>();
        assert_ne!(a, b);
    }

    #[test]
    fn values_fit_in_u32() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        for _ in 0..100 {
            assert!(prng.next() <= u32::MAX as u64);
        }
    }
}
