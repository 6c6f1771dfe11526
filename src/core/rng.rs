//! Game randomness
//!
//! A single ChaCha12 stream drives every random decision in a game: deck
//! shuffles, AI tie-breaks, and the undecided-support draw. Seeded games are
//! fully reproducible; the unseeded variant pulls its state from OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha12Rng,
}

impl GameRng {
    /// Deterministic stream: same seed, same sequence.
    pub fn seeded(seed: u64) -> Self {
        GameRng {
            inner: ChaCha12Rng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible fallback.
    pub fn from_entropy() -> Self {
        GameRng {
            inner: ChaCha12Rng::from_entropy(),
        }
    }

    /// Next float uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        // f < 1.0 so f*len < len mathematically; min() guards float rounding.
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }

    /// Fisher-Yates shuffle: for each i from the top down to 1, swap with a
    /// uniform index in [0, i].
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}
