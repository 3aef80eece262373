//! Random selection for the removal rule.
//!
//! ## Key Features
//!
//! - **Pluggable**: board logic only sees the `SelectionSource` trait
//! - **Deterministic**: same seed produces identical removals
//! - **Scriptable**: `ScriptedSelection` replays fixed choices in tests
//!
//! ## Usage
//!
//! ```
//! use five_in_a_row::core::{GameRng, Position, SelectionSource};
//!
//! let candidates = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//!
//! // Same seed, same picks
//! assert_eq!(rng1.pick(&candidates, 2), rng2.pick(&candidates, 2));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use super::Position;

/// Positions chosen for removal. The rule never asks for more than two.
pub type Picks = SmallVec<[Position; 2]>;

/// Capability to choose `count` distinct positions from a candidate set.
///
/// Implementations must return `min(count, candidates.len())` distinct
/// elements of `candidates`. Shortfall is not an error.
pub trait SelectionSource {
    fn pick(&mut self, candidates: &[Position], count: usize) -> Picks;
}

impl<S: SelectionSource + ?Sized> SelectionSource for &mut S {
    fn pick(&mut self, candidates: &[Position], count: usize) -> Picks {
        (**self).pick(candidates, count)
    }
}

/// Seeded RNG backing the removal rule.
///
/// Uses ChaCha8 for speed and a portable, reproducible stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl SelectionSource for GameRng {
    fn pick(&mut self, candidates: &[Position], count: usize) -> Picks {
        let amount = count.min(candidates.len());
        rand::seq::index::sample(&mut self.inner, candidates.len(), amount)
            .into_iter()
            .map(|idx| candidates[idx])
            .collect()
    }
}

/// Fixed-sequence selection for tests and replays.
///
/// Each draw consumes the next scripted index, reduced modulo the number
/// of candidates still in the pool. Once the script runs out every draw
/// takes index 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedSelection {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSelection {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Always take the first remaining candidate.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }

    /// Scripted indices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &[usize] {
        &self.script[self.cursor.min(self.script.len())..]
    }
}

impl SelectionSource for ScriptedSelection {
    fn pick(&mut self, candidates: &[Position], count: usize) -> Picks {
        let mut pool = candidates.to_vec();
        let mut picks = Picks::new();

        while picks.len() < count && !pool.is_empty() {
            let raw = self.script.get(self.cursor).copied().unwrap_or(0);
            self.cursor += 1;
            picks.push(pool.swap_remove(raw % pool.len()));
        }

        picks
    }
}
