//! Random sources for pack opening and battle setup
//!
//! Every random draw in the engine goes through a [`GameRng`] passed in by the
//! caller. [`SeededRandom`] gives a reproducible stream for a numeric seed,
//! [`DefaultRandom`] wraps platform entropy for casual play.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Replacement state for the xorshift fixed point at zero
const ZERO_STATE_REPLACEMENT: u32 = 0x9E37_79B9;

/// 2^32, the normalisation divisor for [`SeededRandom::next`]
const U32_RANGE: f64 = 4_294_967_296.0;

/// Uniform random source used by the engine
pub trait GameRng {
    /// Next value uniformly distributed in [0, 1)
    fn next(&mut self) -> f64;

    /// Random index in [0, max_exclusive), or 0 when `max_exclusive` is 0
    fn random_int(&mut self, max_exclusive: usize) -> usize {
        if max_exclusive == 0 {
            return 0;
        }
        let value = (self.next() * max_exclusive as f64).floor() as usize;
        value.min(max_exclusive - 1)
    }

    /// Uniform pick from `items`, `None` when empty
    fn random_pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.random_int(items.len());
        items.get(index)
    }

    /// Fisher-Yates shuffle, last index down to 1
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.random_int(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: GameRng + ?Sized> GameRng for &mut R {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

/// One xorshift32 round (13 / 17 / 5)
fn scramble(mut x: u32) -> u32 {
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    x
}

/// Reproducible xorshift32 stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Create a stream for `seed`; the seed is scrambled once before use
    pub fn new(seed: u32) -> Self {
        let state = scramble(seed);
        SeededRandom {
            state: if state == 0 { ZERO_STATE_REPLACEMENT } else { state },
        }
    }

    /// Advance and return the raw 32-bit state
    pub fn next_u32(&mut self) -> u32 {
        self.state = scramble(self.state);
        self.state
    }
}

impl GameRng for SeededRandom {
    fn next(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }
}

/// Non-deterministic source seeded from platform entropy
#[derive(Debug, Clone)]
pub struct DefaultRandom {
    inner: StdRng,
}

impl DefaultRandom {
    pub fn new() -> Self {
        DefaultRandom {
            inner: StdRng::from_entropy(),
        }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRng for DefaultRandom {
    fn next(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Create a reproducible source for `seed`
pub fn create_seeded_random(seed: u32) -> SeededRandom {
    SeededRandom::new(seed)
}
