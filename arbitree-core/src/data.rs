//! Seeds and the random source consumed by generators.

use std::fmt;

/// Splittable random seed.
///
/// A `Seed` is an immutable SplitMix64 state/gamma pair. Advancing it
/// returns a new `Seed`, and `split` produces two independent streams,
/// which keeps every generation run deterministic and reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Split a seed into two independent seeds.
    pub fn split(self) -> (Self, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        let new_gamma = mix_gamma(output);

        (Seed(new_state, gamma), Seed(output, new_gamma))
    }

    /// Produce the next random value and the advanced seed.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Produce a bounded random value in `[0, bound)`.
    pub fn next_bounded(self, bound: u64) -> (u64, Self) {
        let (value, new_seed) = self.next_u64();
        ((value as u128 * bound as u128 >> 64) as u64, new_seed)
    }

    /// Produce a random bool.
    pub fn next_bool(self) -> (bool, Self) {
        let (value, new_seed) = self.next_u64();
        (value & 1 == 1, new_seed)
    }

    /// Create a seed from system entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed(rng.gen(), rng.gen())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// The mutable random cursor generators draw from.
///
/// A `Source` owns a [`Seed`] and advances it in place. Generators receive
/// `&mut Source` and are pure with respect to everything except this
/// cursor; one cursor serves one sequential run, and independent runs
/// should [`fork`](Source::fork) or reseed rather than share a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    seed: Seed,
}

impl Source {
    /// Create a source starting at the given seed.
    pub fn new(seed: Seed) -> Self {
        Source { seed }
    }

    /// Create a source from a single value.
    pub fn from_u64(value: u64) -> Self {
        Source::new(Seed::from_u64(value))
    }

    /// Create a source from system entropy.
    pub fn random() -> Self {
        Source::new(Seed::random())
    }

    /// Draw the next random value, advancing the cursor.
    pub fn next_u64(&mut self) -> u64 {
        let (value, seed) = self.seed.next_u64();
        self.seed = seed;
        value
    }

    /// Draw a bounded random value in `[0, bound)`.
    pub fn next_bounded(&mut self, bound: u64) -> u64 {
        let (value, seed) = self.seed.next_bounded(bound);
        self.seed = seed;
        value
    }

    /// Draw a random bool.
    pub fn next_bool(&mut self) -> bool {
        let (value, seed) = self.seed.next_bool();
        self.seed = seed;
        value
    }

    /// Draw a random double in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Split off an independent source, advancing this one.
    pub fn fork(&mut self) -> Source {
        let (kept, forked) = self.seed.split();
        self.seed = kept;
        Source::new(forked)
    }
}

/// SplitMix64 mixing function.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Gamma value for SplitMix64 splitting; odd for maximal period.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
