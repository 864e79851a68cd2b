//! Seeded, platform-independent shuffling.
//!
//! Every ordering decision in a match comes from a 32-bit linear
//! congruential generator driven by the caller's seed, so the same roster
//! and seed always produce the same teams. The recurrence is fixed:
//!
//! `state = (1664525 * state + 1013904223) mod 2^32`
//!
//! and `next_f64` yields `state / 2^32`.

use std::fmt;
use std::str::FromStr;

use rand::{Error as RandError, RngCore};
use serde::{Deserialize, Serialize};

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A match seed, normalised into the unsigned 32-bit domain.
///
/// Any integer is accepted. Wider or negative values keep their low 32 bits
/// (two's complement), so `-1` and `u32::MAX` are the same seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    /// Normalises an arbitrary signed seed.
    pub const fn new(raw: i64) -> Self {
        Seed(raw as u32)
    }

    /// Returns the normalised value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The seed `k` steps after this one, wrapping at 2^32.
    pub const fn offset(self, k: u32) -> Self {
        Seed(self.0.wrapping_add(k))
    }
}

impl From<u32> for Seed {
    fn from(v: u32) -> Self {
        Seed(v)
    }
}

impl From<i32> for Seed {
    fn from(v: i32) -> Self {
        Seed(v as u32)
    }
}

impl From<i64> for Seed {
    fn from(v: i64) -> Self {
        Seed::new(v)
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Seed(v as u32)
    }
}

impl FromStr for Seed {
    type Err = std::num::ParseIntError;

    /// Parses a decimal integer, signed or unsigned, of up to 64 bits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(v) => Ok(Seed::new(v)),
            Err(_) => s.parse::<u64>().map(Seed::from),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The linear congruential generator behind [`seeded_shuffle`].
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: Seed) -> Self {
        Lcg { state: seed.value() }
    }

    /// Advances the state and returns it.
    #[inline]
    pub fn step(&mut self) -> u32 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Advances the state and returns it as a fraction in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / TWO_POW_32
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Returns a seeded Fisher-Yates permutation of `items`. The input is left
/// untouched; sequences of length 0 or 1 consume no draws.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: Seed) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut lcg = Lcg::new(seed);
    for i in (1..shuffled.len()).rev() {
        let j = lcg.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}
