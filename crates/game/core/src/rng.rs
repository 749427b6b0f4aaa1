//! Seedable random stream consumed by dice and deck shuffles.
//!
//! # Determinism
//!
//! Every random decision in a game draws from one [`RandomSource`]. Two games
//! built from the same seed and the same strategies produce identical rolls,
//! identical shuffles, and therefore identical state at every round.

/// Random-number stream used for dice rolls and deck shuffles.
///
/// Implementations must be deterministic for a given seed.
pub trait RandomSource {
    /// Advances the stream and returns the next 32 random bits.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        (self.next_u32() % sides.max(1)) + 1
    }

    /// Uniform value in `[0, bound)`; returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

/// Shuffles `items` in place (Fisher-Yates) using the given stream.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below((i + 1) as u32) as usize;
        items.swap(i, j);
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 64 bits of LCG state, 32 bits of output per step.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a stream whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed),
        }
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Spreads a user seed across all 64 state bits so that nearby seeds
/// (0, 1, 2, ...) start far apart in the sequence.
pub fn mix_seed(seed: u64) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = seed ^ 0x9e3779b97f4a7c15;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}
