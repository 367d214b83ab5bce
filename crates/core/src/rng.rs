//! RNG module - where new piece kinds come from
//!
//! The engine never reaches for global randomness. It draws kinds from a
//! [`PieceSource`] handed to it at construction:
//!
//! - [`SeededPieces`]: uniform draws over the 7 kinds from a seeded ChaCha8 RNG.
//!   Same seed, same sequence.
//! - [`ScriptedPieces`]: replays a fixed list of kinds in a cycle, for tests and
//!   benchmarks that need to know exactly what spawns next.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Supplier of piece kinds for spawning
pub trait PieceSource {
    /// Draw the next kind
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece kinds from a seeded RNG
#[derive(Debug, Clone)]
pub struct SeededPieces {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededPieces {
    /// Create a new source with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PieceSource for SeededPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Fixed, repeating sequence of piece kinds
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// Cycle through `kinds`. An empty script yields `O` forever.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            next: 0,
        }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::O;
        }
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}
